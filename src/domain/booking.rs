use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled service appointment. Bookings are placed by clients through
/// the customer-facing app; the console is read-only here.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub booking_id: i32,
    pub client_dni: String,
    pub client_name: String,
    pub service_name: String,
    pub scheduled_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
