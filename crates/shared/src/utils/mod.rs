mod logs;
mod masking;
mod unique_id;
mod vat;

pub use self::logs::Logger;
pub use self::masking::{Masked, mask};
pub use self::unique_id::{UNIQUE_ID_LENGTH, generate_unique_id};
pub use self::vat::{compute_vat, parse_amount};
