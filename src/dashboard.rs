use crate::calculator::MacroCalculator;
use crate::error::Result;
use crate::posts::{Authenticator, PostBoard, PostSource};

/// The dashboard screen: a macro calculator next to a post table.
///
/// The two halves share no state.
#[derive(Debug)]
pub struct Dashboard<S, A> {
    pub calculator: MacroCalculator,
    pub posts: PostBoard<S, A>,
}

impl<S: PostSource, A: Authenticator> Dashboard<S, A> {
    pub fn new(source: S, auth: A) -> Result<Self> {
        Ok(Self {
            calculator: MacroCalculator::new()?,
            posts: PostBoard::new(source, auth),
        })
    }
}
