//! Database Models
//!
//! Entities stored in the embedded SurrealDB instance, with RecordId links
//! between them.

pub mod serde_helpers;

pub mod amenity;
pub mod floor;
pub mod hotel_info;
pub mod room;
pub mod tax;
pub mod uom;

pub use amenity::{Amenity, AmenityCreate, AmenityUpdate};
pub use floor::{Floor, FloorCreate, FloorUpdate};
pub use hotel_info::{HotelInfo, HotelInfoUpdate};
pub use room::{Room, RoomCreate, RoomDraft, RoomStatus, RoomType, RoomUpdate};
pub use tax::{Tax, TaxCreate, TaxScope, TaxUpdate};
pub use uom::{Uom, UomCreate, UomUpdate};
