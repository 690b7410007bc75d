//! Tests for archive URL formatting and the missing-artwork policy

#[cfg(test)]
mod tests {
    use covergrid::art::resolver::{Artwork, CoverResolver, Resolution};
    use covergrid::io::configuration::CAA_MISSING_IMAGE;

    fn artwork() -> Artwork {
        Artwork {
            caa_id: 12_345,
            caa_release_mbid: "d101e395-0c04-4237-a3d2-167b1d88056c".to_string(),
        }
    }

    // Tests archive URLs embed the release twice plus the image id and size
    // Verified by swapping caa_id and the release MBID
    #[test]
    fn test_resolve_url_format() {
        assert_eq!(
            CoverResolver::resolve_url(&artwork(), 500).as_deref(),
            Some(
                "https://archive.org/download/mbid-d101e395-0c04-4237-a3d2-167b1d88056c/mbid-d101e395-0c04-4237-a3d2-167b1d88056c-12345_thumb500.jpg"
            )
        );
        assert!(
            CoverResolver::resolve_url(&artwork(), 250)
                .is_some_and(|url| url.ends_with("-12345_thumb250.jpg"))
        );
    }

    // Tests sizes the archive does not publish yield no URL
    // Verified by accepting any size up to 500
    #[test]
    fn test_resolve_url_unsupported_size() {
        for size in [0, 125, 249, 251, 1200] {
            assert!(CoverResolver::resolve_url(&artwork(), size).is_none());
        }
    }

    // Tests missing artwork is skipped when skip_missing is set, regardless of placeholder
    // Verified by checking the placeholder flag first
    #[test]
    fn test_missing_artwork_skipped() {
        for placeholder in [true, false] {
            let resolver = CoverResolver::new(true, placeholder);
            assert_eq!(resolver.resolve(None, 500), Resolution::Skip);
        }
    }

    // Tests missing artwork shows the placeholder or nothing when not skipped
    // Verified by returning Skip for every missing artwork
    #[test]
    fn test_missing_artwork_placeholder() {
        let resolver = CoverResolver::new(false, true);
        assert_eq!(
            resolver.resolve(None, 500),
            Resolution::Url(CAA_MISSING_IMAGE.to_string())
        );

        let resolver = CoverResolver::new(false, false);
        assert_eq!(resolver.resolve(None, 500), Resolution::Empty);
    }

    // Tests exhausted cells never skip
    // Verified by reusing the per-candidate policy for exhaustion
    #[test]
    fn test_missing_outcome() {
        assert_eq!(
            CoverResolver::new(true, true).missing_outcome(),
            Resolution::Url(CAA_MISSING_IMAGE.to_string())
        );
        assert_eq!(
            CoverResolver::new(true, false).missing_outcome(),
            Resolution::Empty
        );
        assert_eq!(CoverResolver::new(true, false).missing_url(), None);
    }

    // Tests present artwork resolves regardless of policy, and bad sizes leave the cell empty
    // Verified by skipping present artwork when skip_missing is set
    #[test]
    fn test_present_artwork() {
        let resolver = CoverResolver::new(true, true);
        assert!(matches!(resolver.resolve(Some(&artwork()), 250), Resolution::Url(_)));
        assert_eq!(resolver.resolve(Some(&artwork()), 300), Resolution::Empty);
        assert!(resolver.skip_missing());
        assert!(resolver.show_placeholder_for_missing());
    }

    // Tests artwork needs both the image id and its release
    // Verified by defaulting a missing release to an empty string
    #[test]
    fn test_artwork_from_parts() {
        assert_eq!(
            Artwork::from_parts(Some(12_345), Some(artwork().caa_release_mbid)),
            Some(artwork())
        );
        assert!(Artwork::from_parts(Some(1), None).is_none());
        assert!(Artwork::from_parts(None, Some("x".to_string())).is_none());
    }
}
