mod booking;
mod geocoder;
mod quote;
mod router;
mod trip;
