mod item_record;

pub use item_record::ItemRecord;
