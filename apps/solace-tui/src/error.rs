pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Http(#[from] reqwest::Error),
	#[error("Server answered {status}: {message}.")]
	Api { status: u16, message: String },
	#[error("Invalid API base URL {url:?}.")]
	InvalidBaseUrl { url: String },
}
