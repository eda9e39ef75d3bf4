pub(crate) mod csv;
pub(crate) mod human;
pub(crate) mod json;
pub(crate) mod plot;
