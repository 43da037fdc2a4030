use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("entity `{0}` not found")]
    NotFound(String),
    #[error("failed in IO")]
    IO(#[from] std::io::Error),
    #[error("argument provided is error: {0}")]
    Argument(String),
    #[error("data error: {0}")]
    Data(String),
    #[error("json document error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("yaml document error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_errors_keep_source() {
        let err: Error = serde_json::from_str::<u32>("[1,").unwrap_err().into();
        let msg = err.to_string();
        assert!(msg.starts_with("json document error: "));
        assert!(msg.contains("line 1"));

        let err: Error = serde_yaml::from_str::<u32>("[oops").unwrap_err().into();
        assert!(err.to_string().len() > "yaml document error: ".len());
    }
}
