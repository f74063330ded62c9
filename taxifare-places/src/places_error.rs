use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("failure calling places api: {source}")]
    HttpError {
        #[from]
        source: reqwest::Error,
    },
    #[error("places api responded with status {0}")]
    UnsuccessfulStatus(u16),
    #[error("failure decoding places api response: {source}")]
    DecodeError {
        #[from]
        source: serde_json::Error,
    },
}
