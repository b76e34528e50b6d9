pub(crate) mod lot;
