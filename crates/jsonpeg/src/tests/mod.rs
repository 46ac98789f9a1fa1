
mod property_restoration;
