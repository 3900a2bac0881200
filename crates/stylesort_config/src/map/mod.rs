mod property_order_map;

pub use property_order_map::*;
