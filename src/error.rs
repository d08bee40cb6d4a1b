use crate::geo::error::GeoError;
use crate::impl_err;
use crate::track::error::SourceError;

#[derive(Debug)]
pub enum Error {
    Geo(GeoError),
    Source(SourceError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl_err!(GeoError, Geo);
impl_err!(SourceError, Source);
