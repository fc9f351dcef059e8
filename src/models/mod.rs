pub mod place;

pub use place::{LatLng, Place, PlaceSelection};
