//! The consumer-facing service object.
//!
//! [`Gateway`] wraps every snapshot builder and catalog behind an async call
//! with simulated latency, keeps the login session in a [`SessionStore`], and
//! owns the background poller between [`Gateway::start`] and
//! [`Gateway::stop`]. Nothing runs until `start` is called.

use std::future::Future;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use orion_error::ErrorOweBase;
use orion_error::op_context;
use orion_error::prelude::*;
use tokio_util::sync::CancellationToken;
use ws_config::{GatewayConfig, SimConfig};
use ws_core::model::{
    ActivityFilter, AiPredictions, AlertFilter, AlertPage, DashboardSummary, DataEnvelope,
    Employee, EmployeeFilter, EmployeePage, EmployeeUpdate, EnergyDashboard, EnvironmentalPoint,
    ExportedReport, HealthReport, HealthStatus, LoginResponse, MutationResponse, NewEmployee,
    NewSpace, OccupancyPoint, ReportFormat, SeriesDomain, Space, SpaceConflict, SpaceFilter,
    SpacePage, SpaceTypeAggregate, TimeRange, UserActivityPage, UserRecord, UserType,
    WeeklyTrendPoint, ZoneCell,
};
use ws_datagen::Generator;
use ws_datagen::catalog::alert_page;
use ws_datagen::snapshot::{employee_page, space_page};

use crate::clock::{Clock, SystemClock};
use crate::error::{RuntimeReason, RuntimeResult, validation};
use crate::faults::FaultInjector;
use crate::hub::{PollUpdate, Subscription, SubscriptionHub};
use crate::lifecycle::{Running, TaskGroup};
use crate::poller::run_poller;
use crate::roster::Rosters;
use crate::session::{
    self, AUTH_TOKEN_KEY, FileStore, MemoryStore, SESSION_KEYS, SessionState, SessionStore,
    USER_DATA_KEY, USER_TYPE_KEY,
};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(45);

/// How expensive a call pretends to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Weight {
    Light,
    Standard,
    Heavy,
}

#[derive(Debug, Clone, Copy)]
struct Latency {
    light: Duration,
    standard: Duration,
    heavy: Duration,
}

impl Latency {
    fn from_config(config: &GatewayConfig) -> Self {
        Self {
            light: config.light_latency.as_duration(),
            standard: config.standard_latency.as_duration(),
            heavy: config.heavy_latency.as_duration(),
        }
    }

    fn of(&self, weight: Weight) -> Duration {
        match weight {
            Weight::Light => self.light,
            Weight::Standard => self.standard,
            Weight::Heavy => self.heavy,
        }
    }
}

// ---------------------------------------------------------------------------
// GatewayBuilder
// ---------------------------------------------------------------------------

pub struct GatewayBuilder {
    seed: Option<u64>,
    generator: Option<Generator>,
    sessions: Option<Arc<dyn SessionStore>>,
    clock: Arc<dyn Clock>,
    latency: GatewayConfig,
    poll_interval: Duration,
    failure_rate: f64,
}

impl Default for GatewayBuilder {
    fn default() -> Self {
        Self {
            seed: None,
            generator: None,
            sessions: None,
            clock: Arc::new(SystemClock),
            latency: GatewayConfig::default(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            failure_rate: 0.0,
        }
    }
}

impl GatewayBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed both the data generator and the fault injector.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a prepared generator instead of one built from the seed.
    pub fn generator(mut self, generator: Generator) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn session_store(mut self, store: impl SessionStore + 'static) -> Self {
        self.sessions = Some(Arc::new(store));
        self
    }

    pub fn shared_session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.sessions = Some(store);
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Latency settings. The session file in `config` is ignored here.
    pub fn latency(mut self, config: GatewayConfig) -> Self {
        self.latency = config;
        self
    }

    /// No simulated latency at all.
    pub fn instant(self) -> Self {
        self.latency(GatewayConfig::instant())
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = rate;
        self
    }

    pub fn build(self) -> Gateway {
        let generator = self
            .generator
            .unwrap_or_else(|| Generator::from_seed(self.seed));
        let fault_seed = self.seed.map(|s| s.rotate_left(17) ^ 0x5eed);
        Gateway {
            generator: Arc::new(Mutex::new(generator)),
            sessions: self
                .sessions
                .unwrap_or_else(|| Arc::new(MemoryStore::new())),
            clock: self.clock,
            latency: Latency::from_config(&self.latency),
            poll_interval: self.poll_interval,
            faults: FaultInjector::new(self.failure_rate, fault_seed),
            hub: SubscriptionHub::new(),
            rosters: Mutex::new(Rosters::default()),
            running: Mutex::new(None),
        }
    }
}

// ---------------------------------------------------------------------------
// Gateway
// ---------------------------------------------------------------------------

pub struct Gateway {
    generator: Arc<Mutex<Generator>>,
    sessions: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
    latency: Latency,
    poll_interval: Duration,
    faults: FaultInjector,
    hub: SubscriptionHub,
    /// Locked after `generator` whenever both are held.
    rosters: Mutex<Rosters>,
    running: Mutex<Option<Running>>,
}

impl Gateway {
    pub fn builder() -> GatewayBuilder {
        GatewayBuilder::new()
    }

    /// Build a gateway from a loaded config. A relative session file is
    /// resolved against `base_dir`.
    #[tracing::instrument(name = "gateway.init", skip_all)]
    pub fn from_config(config: &SimConfig, base_dir: &Path) -> RuntimeResult<Self> {
        let mut op = op_context!("gateway-init").with_auto_log();
        op.record("base_dir", base_dir.display().to_string().as_str());

        let mut builder = GatewayBuilder::new()
            .latency(config.gateway.clone())
            .poll_interval(config.poller.interval.as_duration())
            .failure_rate(config.faults.failure_rate);
        if let Some(seed) = config.generator.seed {
            builder = builder.seed(seed);
        }
        match config.session_path(base_dir) {
            Some(path) => {
                op.record("session_file", path.display().to_string().as_str());
                let store = FileStore::open(&path).owe(RuntimeReason::Bootstrap)?;
                builder = builder.session_store(store);
            }
            None => {
                op.record("session_file", "memory");
            }
        }

        let gateway = builder.build();
        ws_info!(
            sys,
            seeded = config.generator.seed.is_some(),
            poll_interval = ?gateway.poll_interval,
            failure_rate = gateway.faults.failure_rate(),
            "gateway ready"
        );
        op.mark_suc();
        Ok(gateway)
    }

    // -- lifecycle ----------------------------------------------------------

    /// Spawn the poller. Must be called inside a Tokio runtime; fails when
    /// already running.
    pub fn start(&self) -> RuntimeResult<()> {
        let mut running = self.running.lock().expect("gateway state lock poisoned");
        if running.is_some() {
            return Err(StructError::from(RuntimeReason::Bootstrap)
                .with_detail("gateway is already running"));
        }
        let runtime = tokio::runtime::Handle::try_current().owe(RuntimeReason::Bootstrap)?;

        let cancel = CancellationToken::new();
        let mut group = TaskGroup::new("poller");
        group.push(runtime.spawn(run_poller(
            self.generator.clone(),
            self.hub.clone(),
            self.clock.clone(),
            self.poll_interval,
            cancel.child_token(),
        )));
        *running = Some(Running::new(cancel, group));
        ws_info!(sys, interval = ?self.poll_interval, "gateway started");
        Ok(())
    }

    /// Cancel and join the poller. Stopping a stopped gateway does nothing.
    pub async fn stop(&self) -> RuntimeResult<()> {
        let running = self
            .running
            .lock()
            .expect("gateway state lock poisoned")
            .take();
        match running {
            Some(running) => {
                running.shutdown().await?;
                ws_info!(sys, "gateway stopped");
            }
            None => ws_debug!(sys, "stop on idle gateway"),
        }
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.running
            .lock()
            .expect("gateway state lock poisoned")
            .is_some()
    }

    pub fn subscribe<F>(&self, domain: SeriesDomain, callback: F) -> Subscription
    where
        F: Fn(&PollUpdate) + Send + Sync + 'static,
    {
        self.hub.subscribe(domain, callback)
    }

    pub fn hub(&self) -> &SubscriptionHub {
        &self.hub
    }

    /// Force the next `n` calls to fail with an injected fault.
    pub fn fail_next(&self, n: u32) {
        self.faults.force_next(n);
    }

    /// Race `fut` against `token`; cancellation wins ties.
    pub async fn cancellable<T, F>(token: &CancellationToken, fut: F) -> RuntimeResult<T>
    where
        F: Future<Output = RuntimeResult<T>>,
    {
        tokio::select! {
            biased;
            _ = token.cancelled() => Err(StructError::from(RuntimeReason::Cancelled)
                .with_detail("call cancelled by consumer")),
            res = fut => res,
        }
    }

    // -- call plumbing ------------------------------------------------------

    async fn call<T>(
        &self,
        op: &'static str,
        weight: Weight,
        build: impl FnOnce(&mut Generator, DateTime<Utc>) -> T,
    ) -> RuntimeResult<T> {
        self.enter(op, weight).await?;
        let now = self.clock.now();
        let out = {
            let mut generator = self.generator.lock().expect("generator lock poisoned");
            build(&mut generator, now)
        };
        ws_debug!(data, op, "snapshot built");
        Ok(out)
    }

    /// Fault check followed by the simulated round trip.
    async fn enter(&self, op: &'static str, weight: Weight) -> RuntimeResult<()> {
        if let Err(e) = self.faults.check(op) {
            ws_warn!(sys, op, "injected fault");
            return Err(e);
        }
        let delay = self.latency.of(weight);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        Ok(())
    }

    // -- session ------------------------------------------------------------

    /// Log in as the fixed mock user of `user_type`. Only empty credentials
    /// are rejected.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        user_type: UserType,
    ) -> RuntimeResult<LoginResponse> {
        self.enter("login", Weight::Light).await?;
        if email.trim().is_empty() || password.is_empty() {
            return Err(validation("email and password are required"));
        }

        let now = self.clock.now();
        let response = LoginResponse {
            access_token: format!("mock_jwt_{}", now.timestamp_millis()),
            user: UserRecord::mock(user_type, email),
            user_type,
        };
        let user_json = serde_json::to_string(&response.user).owe(RuntimeReason::Session)?;

        session::write_all(
            self.sessions.as_ref(),
            &[
                (AUTH_TOKEN_KEY, response.access_token.as_str()),
                (USER_DATA_KEY, user_json.as_str()),
                (USER_TYPE_KEY, user_type.as_str()),
            ],
        )
        .owe(RuntimeReason::Session)?;

        ws_info!(sess, user_type = user_type.as_str(), "logged in");
        Ok(response)
    }

    /// Clear the session. Succeeds when nobody is logged in.
    pub async fn logout(&self) -> RuntimeResult<()> {
        self.enter("logout", Weight::Light).await?;
        for key in SESSION_KEYS {
            self.sessions.remove(key).owe(RuntimeReason::Session)?;
        }
        ws_info!(sess, "logged out");
        Ok(())
    }

    pub fn session_state(&self) -> RuntimeResult<SessionState> {
        SessionState::of(self.sessions.as_ref()).owe(RuntimeReason::Session)
    }

    pub fn session_store(&self) -> &dyn SessionStore {
        self.sessions.as_ref()
    }

    // -- snapshots ----------------------------------------------------------

    pub async fn get_dashboard_summary(&self) -> RuntimeResult<DashboardSummary> {
        self.call("get_dashboard_summary", Weight::Light, |g, now| {
            g.summary(now)
        })
        .await
    }

    /// Hourly occupancy; the range is accepted for interface parity only.
    pub async fn get_occupancy_data(
        &self,
        time_range: TimeRange,
    ) -> RuntimeResult<DataEnvelope<Vec<OccupancyPoint>>> {
        ws_debug!(data, range = time_range.as_str(), "occupancy requested");
        self.call("get_occupancy_data", Weight::Standard, |g, now| {
            DataEnvelope::new(g.occupancy(now), now)
        })
        .await
    }

    pub async fn get_space_data(&self) -> RuntimeResult<DataEnvelope<Vec<SpaceTypeAggregate>>> {
        self.call("get_space_data", Weight::Standard, |g, now| {
            DataEnvelope::new(g.space_aggregates(), now)
        })
        .await
    }

    pub async fn get_environmental_data(
        &self,
    ) -> RuntimeResult<DataEnvelope<Vec<EnvironmentalPoint>>> {
        self.call("get_environmental_data", Weight::Standard, |g, now| {
            DataEnvelope::new(g.environmental(now), now)
        })
        .await
    }

    pub async fn get_energy_dashboard(&self) -> RuntimeResult<EnergyDashboard> {
        self.call("get_energy_dashboard", Weight::Standard, |g, now| {
            g.energy_dashboard(now)
        })
        .await
    }

    pub async fn get_weekly_trend(&self) -> RuntimeResult<DataEnvelope<Vec<WeeklyTrendPoint>>> {
        self.call("get_weekly_trend", Weight::Standard, |g, now| {
            DataEnvelope::new(g.weekly_trend(), now)
        })
        .await
    }

    pub async fn get_zone_heatmap(&self) -> RuntimeResult<DataEnvelope<Vec<ZoneCell>>> {
        self.call("get_zone_heatmap", Weight::Standard, |g, now| {
            DataEnvelope::new(g.zone_grid(), now)
        })
        .await
    }

    pub async fn get_ai_predictions(&self) -> RuntimeResult<AiPredictions> {
        self.call("get_ai_predictions", Weight::Heavy, |g, now| {
            g.ai_predictions(now)
        })
        .await
    }

    /// Regenerate the space roster, keep it for `add_space` and conflict
    /// resolution, and return the filtered page.
    pub async fn get_detailed_spaces(&self, filter: SpaceFilter) -> RuntimeResult<SpacePage> {
        let spaces = self
            .call("get_detailed_spaces", Weight::Standard, |g, _| g.spaces())
            .await?;
        let page = space_page(spaces.clone(), &filter);
        self.rosters().replace_spaces(spaces);
        Ok(page)
    }

    pub async fn get_alerts(&self, filter: AlertFilter) -> RuntimeResult<AlertPage> {
        self.call("get_alerts", Weight::Light, |g, now| {
            alert_page(g.alerts(now), &filter)
        })
        .await
    }

    /// Conflicts of the retained space roster, worst first, with recorded
    /// resolutions applied.
    pub async fn get_conflicts(&self) -> RuntimeResult<Vec<SpaceConflict>> {
        self.call("get_conflicts", Weight::Standard, |g, now| {
            self.rosters().conflicts(g, now)
        })
        .await
    }

    /// Mark the conflict of `space_id` resolved. A missing or blank note
    /// becomes "Manually resolved".
    pub async fn resolve_conflict(
        &self,
        space_id: u32,
        resolution: Option<String>,
    ) -> RuntimeResult<MutationResponse<SpaceConflict>> {
        let conflict = self
            .call("resolve_conflict", Weight::Light, |g, now| {
                self.rosters().resolve_conflict(space_id, resolution, g, now)
            })
            .await??;
        ws_info!(data, space_id, "conflict resolved");
        Ok(MutationResponse::ok(conflict, "Conflict resolved successfully"))
    }

    pub async fn get_user_activity(
        &self,
        range: TimeRange,
        filter: ActivityFilter,
    ) -> RuntimeResult<UserActivityPage> {
        ws_debug!(data, range = %range, "user activity requested");
        self.call("get_user_activity", Weight::Standard, |g, now| {
            g.user_activity(now, range, &filter)
        })
        .await
    }

    /// Answered immediately: no latency, no injected faults.
    pub fn health(&self) -> HealthReport {
        let (status, logged_in) = match self.session_state() {
            Ok(state) => (HealthStatus::Healthy, state == SessionState::LoggedIn),
            Err(e) => {
                ws_warn!(sess, error = %e, "session store unreadable");
                (HealthStatus::Degraded, false)
            }
        };
        HealthReport {
            status,
            timestamp: self.clock.now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            poller_running: self.is_running(),
            logged_in,
        }
    }

    pub async fn export_report(
        &self,
        kind: &str,
        range: TimeRange,
        format: ReportFormat,
    ) -> RuntimeResult<ExportedReport> {
        let report = self
            .call("export_report", Weight::Heavy, |g, now| {
                g.export(kind, range, format, now)
            })
            .await?
            .err_conv()?;
        ws_info!(data, file = %report.filename, "report exported");
        Ok(report)
    }

    // -- roster -------------------------------------------------------------

    /// Regenerate the roster, keep it for later mutations, and return the
    /// filtered page.
    pub async fn get_employees(&self, filter: EmployeeFilter) -> RuntimeResult<EmployeePage> {
        let employees = self
            .call("get_employees", Weight::Heavy, |g, _| g.employees())
            .await?;
        let page = employee_page(&employees, &filter);
        self.rosters().replace_employees(employees);
        Ok(page)
    }

    pub async fn add_employee(&self, form: NewEmployee) -> RuntimeResult<MutationResponse<Employee>> {
        let employee = self
            .call("add_employee", Weight::Heavy, |g, _| {
                self.rosters().add_employee(form, g)
            })
            .await??;
        ws_info!(data, id = employee.id, "employee added");
        Ok(MutationResponse::ok(employee, "Employee added successfully"))
    }

    pub async fn update_employee(
        &self,
        id: u32,
        update: EmployeeUpdate,
    ) -> RuntimeResult<MutationResponse<Employee>> {
        let employee = self
            .call("update_employee", Weight::Heavy, |g, _| {
                self.rosters().update_employee(id, update, g)
            })
            .await??;
        ws_info!(data, id, "employee updated");
        Ok(MutationResponse::ok(employee, "Employee updated successfully"))
    }

    pub async fn delete_employee(&self, id: u32) -> RuntimeResult<MutationResponse<Employee>> {
        let removed = self
            .call("delete_employee", Weight::Heavy, |g, _| {
                self.rosters().delete_employee(id, g)
            })
            .await??;
        ws_info!(data, id, "employee deleted");
        Ok(MutationResponse::ok(removed, "Employee deleted successfully"))
    }

    /// Append a vacant space to the retained space roster.
    pub async fn add_space(&self, form: NewSpace) -> RuntimeResult<MutationResponse<Space>> {
        let space = self
            .call("add_space", Weight::Heavy, |g, _| self.rosters().add_space(form, g))
            .await??;
        ws_info!(data, id = space.id, kind = %space.kind, "space added");
        Ok(MutationResponse::ok(space, "Space added successfully"))
    }

    fn rosters(&self) -> MutexGuard<'_, Rosters> {
        self.rosters.lock().expect("roster lock poisoned")
    }
}

impl Drop for Gateway {
    fn drop(&mut self) {
        if let Ok(mut state) = self.running.lock()
            && let Some(running) = state.take()
        {
            running.cancel();
        }
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("latency", &self.latency)
            .field("poll_interval", &self.poll_interval)
            .field("faults", &self.faults)
            .field("running", &self.is_running())
            .finish_non_exhaustive()
    }
}
