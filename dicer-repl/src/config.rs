use dicer_lib::options::Options;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read `{path}`: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid options in `{path}`: {source}")]
    Ron {
        path: String,
        source: ron::error::SpannedError,
    },
}

/// Load options from a RON file, defaults when no file is given
pub fn load(path: Option<&Path>) -> Result<Options, Error> {
    let Some(path) = path else {
        return Ok(Options::default());
    };
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;
    let options = parse(&text).map_err(|source| Error::Ron {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(?options, "loaded options");
    Ok(options)
}

fn parse(text: &str) -> Result<Options, ron::error::SpannedError> {
    ron::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::load;
    use super::parse;
    use dicer_lib::options::Options;

    #[test]
    fn no_file_test() {
        assert_eq!(Options::default(), load(None).unwrap());
    }

    #[test]
    fn partial_test() {
        let options = parse(r#"(command: "3d6", throttles: (faces: Some(1000), repeat: None))"#).unwrap();
        assert_eq!("3d6", options.command);
        assert_eq!(Some(1000), options.throttles.faces);
        assert_eq!(None, options.throttles.repeat);
        assert_eq!(Some(100), options.throttles.times);
    }

    #[test]
    fn missing_file_test() {
        let error = load(Some(std::path::Path::new("/nonexistent/dicer.ron"))).unwrap_err();
        assert!(error.to_string().starts_with("cannot read `/nonexistent/dicer.ron`"));
    }
}
