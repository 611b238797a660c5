use std::string::FromUtf8Error;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum RequestError {
    #[error("Failed to write XML request body: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML request body is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

pub type RequestResult<T> = Result<T, RequestError>;
