pub mod handlers;
pub mod router;
pub mod models;
pub mod services;

pub use models::{AppointmentError, BookingRequest, PrepareBookingRequest};
pub use router::appointment_routes;
pub use services::AppointmentBookingService;
