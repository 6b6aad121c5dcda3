//! sea-orm entities owned by the staffs service.

pub mod staffs;
