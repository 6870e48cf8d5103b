use circ_kernel::format_context;
use std::borrow::Cow;

pub type Result<T> = std::result::Result<T, PatronNoticeError>;

/// Error types specific to patron notice templates.
#[derive(Debug, thiserror::Error)]
pub enum PatronNoticeError {
    /// The template lookup collaborator failed.
    #[error("Template lookup failed{}: {message}", format_context(.context))]
    Lookup { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal patron notice error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl PatronNoticeError {
    pub fn lookup(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Lookup { message: message.into(), context: None }
    }
}

pub trait PatronNoticeErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T>;
}

impl<T> PatronNoticeErrorExt<T> for Result<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut err| {
            match &mut err {
                PatronNoticeError::Lookup { context: c, .. }
                | PatronNoticeError::Internal { context: c, .. } => *c = Some(context.into()),
            }
            err
        })
    }
}

impl From<&'static str> for PatronNoticeError {
    fn from(s: &'static str) -> Self {
        Self::Internal { message: Cow::Borrowed(s), context: None }
    }
}

impl From<String> for PatronNoticeError {
    fn from(s: String) -> Self {
        Self::Internal { message: Cow::Owned(s), context: None }
    }
}
