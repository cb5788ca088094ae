/// Base URL of the Rec.gov internal API.
pub const INTERNAL_BASE_URL: &str = "https://www.recreation.gov/api";

/// Path of the monthly availability endpoint, relative to the base URL.
pub const MONTHLY_AVAILABILITY_PATH: &str = "/camps/availability/campground/{facility_id}/month";

/// Browser user agent sent with every availability request.
pub const AVAILABILITY_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/85.0.4183.102 Safari/537.36";

/// `chrono` format of the `start_date` query parameter.
pub const START_DATE_FORMAT: &str = "%Y-%m-%dT00:00:00.000Z";

/// Status label the API uses for a bookable night.
pub const STATUS_AVAILABLE: &str = "Available";
