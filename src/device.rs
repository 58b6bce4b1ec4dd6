/// The firmware posts to `/sensors/<scheme>:<id>/<...>`: the device id
/// is whatever follows the last `:` in the second-to-last path segment,
/// or the whole segment when it has no `:`. `None` means the path was
/// too short or the id came out empty; callers reject that as a client
/// error.
pub fn device_id_from_path(path: &str) -> Option<&str> {
    let mut segments = path.split('/').rev();
    segments.next()?;
    let segment = segments.next()?;
    let id = segment.rsplit(':').next().unwrap_or(segment);
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_the_part_after_the_scheme() {
        assert_eq!(
            device_id_from_path("/sensors/airgradient:AG-12345/measures"),
            Some("AG-12345")
        );
    }

    #[test]
    fn segment_without_colon_is_taken_whole() {
        assert_eq!(
            device_id_from_path("/sensors/AG-12345/measures"),
            Some("AG-12345")
        );
    }

    #[test]
    fn only_the_last_colon_counts() {
        assert_eq!(
            device_id_from_path("/sensors/proto:airgradient:dev1/m"),
            Some("dev1")
        );
    }

    #[test]
    fn trailing_slash_still_resolves() {
        assert_eq!(
            device_id_from_path("/sensors/airgradient:AG-1/"),
            Some("AG-1")
        );
    }

    #[test]
    fn short_or_empty_paths_are_rejected() {
        assert_eq!(device_id_from_path(""), None);
        assert_eq!(device_id_from_path("/measures"), None);
        assert_eq!(device_id_from_path("measures"), None);
    }

    #[test]
    fn empty_id_after_colon_is_rejected() {
        assert_eq!(device_id_from_path("/sensors/airgradient:/measures"), None);
    }
}
