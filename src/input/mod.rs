pub(crate) mod cursor;
pub(crate) mod motion;
pub(crate) mod reduced_motion;
pub(crate) mod script;
