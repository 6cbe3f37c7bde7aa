//! Record types returned by the gateway. Every record is regenerated per call;
//! ids are only meaningful within one batch.

pub mod activity;
pub mod dashboard;
pub mod employee;
pub mod envelope;
pub mod health;
pub mod insight;
pub mod report;
pub mod series;
pub mod session;
pub mod space;
pub mod trend;
pub mod zone;

pub use activity::{
    ActivityFilter, ActivityMetadata, ActivityType, UserActivity, UserActivityPage,
};
pub use dashboard::{
    CostSavingsPotential, DashboardSummary, EnergyAction, EnergyAnalysis, EnergyDashboard,
    EnergyForecast, HourlyAverage, QuickStats, SummaryCounters, TrendDirection, Trends,
};
pub use employee::{
    Employee, EmployeeFilter, EmployeePage, EmployeeStatus, EmployeeUpdate, NewEmployee,
};
pub use envelope::{DataEnvelope, MutationResponse};
pub use health::{HealthReport, HealthStatus};
pub use insight::{
    AiPredictions, Alert, AlertFilter, AlertMetadata, AlertPage, Anomaly, ConflictIssue,
    EnergyPredictorReport, Optimization, Recommendation, SpaceConflict, SpaceOptimizerReport,
    UtilizationForecast,
};
pub use report::{ExportedReport, ReportFormat, ReportPayload, ReportSummary};
pub use series::{
    EnergyPoint, EnvironmentalPoint, HourlyReading, OccupancyPoint, SeriesDomain, TimeRange,
    hour_label,
};
pub use session::{LoginResponse, UserRecord, UserType};
pub use space::{
    EnvironmentReading, NewSpace, Space, SpaceFilter, SpaceKind, SpacePage, SpaceTypeAggregate,
};
pub use trend::{WEEKDAYS, WeeklyTrendPoint};
pub use zone::{ZoneCell, ZoneStatus};
