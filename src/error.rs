#[derive(Debug)]
pub enum ErrorKind {
    Amount,
    Frontend,
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn new<T: Into<String>>(kind: ErrorKind, message: T) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn is_amount(&self) -> bool {
        matches!(self.kind, ErrorKind::Amount)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::new(ErrorKind::Frontend, error.to_string())
    }
}

impl From<dialoguer::Error> for Error {
    fn from(error: dialoguer::Error) -> Self {
        Error::new(ErrorKind::Frontend, error.to_string())
    }
}
