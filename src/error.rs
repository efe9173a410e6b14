use std::fmt;

#[macro_export]
macro_rules! request_error {
    ($($arg:tt)*) => {
        Err(Box::new($crate::error::RequestError {
            message: format!($($arg)*)
        }))
    };
}
/// A request that can not be served, independent of how it parses
#[derive(Debug)]
pub struct RequestError {
    pub message: String,
}
impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bad request: {}", self.message)
    }
}
impl std::error::Error for RequestError {

}

pub type BoxedErrorTrait = Box<(dyn std::error::Error + 'static)>;
