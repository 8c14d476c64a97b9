use reqwest::{Response, StatusCode};

use crate::Error;

pub trait ResponseExt: Sized {
    fn ensure_success(self) -> Result<Self, Error>;
    fn ensure_not_found(self) -> Result<Self, Error>;
}

impl ResponseExt for Response {
    fn ensure_success(self) -> Result<Self, Error> {
        if self.status().is_success() {
            Ok(self)
        } else {
            Err(Error::Status {
                target: self.url().to_string(),
                status: self.status(),
            })
        }
    }

    fn ensure_not_found(self) -> Result<Self, Error> {
        if self.status() == StatusCode::NOT_FOUND {
            Ok(self)
        } else {
            Err(Error::UnexpectedStatus {
                target: self.url().to_string(),
                expected: StatusCode::NOT_FOUND,
                actual: self.status(),
            })
        }
    }
}
