use serde::{Deserialize, Serialize};

/// Response of `/generate-file-doc` and `/generate-file-doc/upload`.
#[derive(Serialize, Deserialize, Debug)]
pub struct FileDocResponse {
    pub documentation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_doc_response_shape() {
        let response: FileDocResponse =
            serde_json::from_str(r###"{"documentation": "## utils.js"}"###).unwrap();
        assert_eq!(response.documentation, "## utils.js");
    }
}
