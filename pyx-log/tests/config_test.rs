use pyx_log::{ConfigError, LogError, Logger, LoggerConfig, Mode, DEFAULT_DEBUG_VAR};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = LoggerConfig::new("Me");

        assert_eq!(config.name, "Me");
        assert_eq!(config.mode, Mode::Normal);
        assert_eq!(config.debug_var, DEFAULT_DEBUG_VAR);
        assert!(config.ansi);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_minimal_file() {
        let file = write_config("name = \"World\"\n");

        let config = LoggerConfig::load(file.path()).unwrap();

        assert_eq!(config, LoggerConfig::new("World"));
    }

    #[test]
    fn test_load_full_file() {
        let file = write_config(
            r#"
name = "Me"
mode = "silent"
debug_var = "MY_APP_DEBUG"
ansi = false
"#,
        );

        let config = LoggerConfig::load(file.path()).unwrap();

        assert_eq!(config.name, "Me");
        assert_eq!(config.mode, Mode::Silent);
        assert_eq!(config.debug_var, "MY_APP_DEBUG");
        assert!(!config.ansi);
    }

    #[test]
    fn test_load_missing_file() {
        let result = LoggerConfig::load("definitely/not/here.toml");

        match result {
            Err(LogError::Config(ConfigError::FileNotFound { path })) => {
                assert!(path.contains("here.toml"));
            }
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_name() {
        let file = write_config("mode = \"normal\"\n");

        let result = LoggerConfig::load(file.path());

        assert!(matches!(
            result,
            Err(LogError::Config(ConfigError::Load { .. }))
        ));
    }

    #[test]
    fn test_load_invalid_mode() {
        let file = write_config("name = \"Me\"\nmode = \"loud\"\n");

        assert!(LoggerConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_empty_debug_var_rejected() {
        let file = write_config("name = \"Me\"\ndebug_var = \"  \"\n");

        match LoggerConfig::load(file.path()) {
            Err(LogError::Config(ConfigError::InvalidValue { field, .. })) => {
                assert_eq!(field, "debug_var");
            }
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_logger_from_config() {
        let mut config = LoggerConfig::new("Configured");
        config.mode = Mode::Silent;
        config.ansi = false;

        let logger = Logger::from_config(&config);

        assert_eq!(logger.name(), "Configured");
        assert_eq!(logger.rendered_label(), "[Configured]");
        assert!(logger.is_silent());
    }

    #[test]
    fn test_config_clone() {
        let config = LoggerConfig::new("Me");
        let cloned = config.clone();

        assert_eq!(cloned, config);
    }
}
