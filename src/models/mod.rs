// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BudgetDurationRecord, CityId, CityRecommendation, CityTypeRecord, ExperienceType,
    RangeBounds, Table, TypeId,
};
pub use requests::{CitiesRequest, RequestError};
pub use responses::{ErrorResponse, HealthResponse, PreflightResponse, ServiceInfoResponse};
