//! Tests for grid option defaults, background parsing and validation order

#[cfg(test)]
mod tests {
    use covergrid::io::error::{CoverArtError, ErrorKind};
    use covergrid::io::options::{Background, GridConfig};

    fn rejected_parameter(config: &GridConfig) -> &'static str {
        match config.validate() {
            Err(CoverArtError::InvalidParameter { parameter, .. }) => parameter,
            other => unreachable!("Expected InvalidParameter, got {other:?}"),
        }
    }

    // Tests defaults skip missing covers and show the placeholder on a white background
    // Verified by defaulting skip_missing to false
    #[test]
    fn test_defaults() {
        let config = GridConfig::new(3, 600);

        assert_eq!(config.background, "#FFFFFF");
        assert!(config.skip_missing);
        assert!(config.show_placeholder_for_missing);
        assert_eq!(config.validate().unwrap(), Background::Rgb(255, 255, 255));
    }

    // Tests builder setters
    // Verified by ignoring the placeholder setter
    #[test]
    fn test_builder_setters() {
        let config = GridConfig::new(2, 500)
            .with_background("black")
            .with_skip_missing(false)
            .with_placeholder_for_missing(false);

        assert!(!config.skip_missing);
        assert!(!config.show_placeholder_for_missing);
        assert_eq!(config.validate().unwrap(), Background::Black);
    }

    // Tests dimension and image size bounds are inclusive
    // Verified by using an exclusive upper bound for image size
    #[test]
    fn test_bounds_inclusive() {
        assert!(GridConfig::new(2, 128).validate().is_ok());
        assert!(GridConfig::new(5, 1024).validate().is_ok());

        assert_eq!(rejected_parameter(&GridConfig::new(1, 500)), "dimension");
        assert_eq!(rejected_parameter(&GridConfig::new(6, 500)), "dimension");
        assert_eq!(rejected_parameter(&GridConfig::new(3, 127)), "image_size");
        assert_eq!(rejected_parameter(&GridConfig::new(3, 1025)), "image_size");
    }

    // Tests the dimension is reported before the background and the background before the size
    // Verified by checking image size first
    #[test]
    fn test_validation_order() {
        let config = GridConfig::new(9, 9).with_background("mauve");
        assert_eq!(rejected_parameter(&config), "dimension");

        let config = GridConfig::new(3, 9).with_background("mauve");
        assert_eq!(rejected_parameter(&config), "background");

        let err = config.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().contains("mauve"));
    }

    // Tests named backgrounds and colour codes parse
    // Verified by parsing channels in BGR order
    #[test]
    fn test_background_parsing() {
        assert_eq!("transparent".parse::<Background>().unwrap(), Background::Transparent);
        assert_eq!("white".parse::<Background>().unwrap(), Background::White);
        assert_eq!("#1a2B3c".parse::<Background>().unwrap(), Background::Rgb(0x1a, 0x2b, 0x3c));

        for bad in ["", "#", "#12345", "#1234567", "#12345g", "123456", "Black", "#ééé"] {
            assert!(bad.parse::<Background>().is_err(), "{bad:?}");
        }
    }

    // Tests colour codes print in canonical upper-case form
    // Verified by printing lower-case hex
    #[test]
    fn test_background_display() {
        assert_eq!(Background::Rgb(0x1a, 0, 255).to_string(), "#1A00FF");
        assert_eq!(Background::Transparent.to_string(), "transparent");
        assert_eq!(Background::parse_color_code("#000000"), Some((0, 0, 0)));
    }
}
