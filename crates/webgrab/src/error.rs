use pastey::paste;

pub type Result<T> = core::result::Result<T, Error>;

/// Everything a strategy can fail with. The orchestrator reports every kind
/// the same way.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// name resolution or connection establishment
    #[error("[Connect Error] {0}")]
    Connect(String),
    /// stream broke mid-transfer
    #[error("[IO Error] {0}")]
    Io(String),
    /// raw response without a blank-line separator, bad status line, ...
    #[error("[Parse Error] {0}")]
    Parse(String),
    /// anything the managed http client reports
    #[error("[Http Error] {0}")]
    Http(String),
    /// the body could not be written to its output file
    #[error("[Write Error] {0}")]
    Write(String),
}

macro_rules! impl_error_ctor {
    (
        $enum_parent:ident :: $( $enum_ident:ident ),* $(,)?
    ) => {
        paste! {
            impl $enum_parent {
                $(
                    #[allow(unused)]
                    pub fn [< $enum_ident:lower >]<S: Into<String>>(msg: S) -> Self {
                        $enum_parent::$enum_ident(msg.into())
                    }
                )*
            }
        }
    };
}

impl_error_ctor!(Error::Connect, Io, Parse, Http, Write);

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            return Self::Connect(e.to_string());
        }
        Self::Http(e.to_string())
    }
}
