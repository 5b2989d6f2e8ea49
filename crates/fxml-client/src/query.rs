//! Per-operation query normalization
//!
//! The structured parameter sets here fill in the defaults the service
//! expects and, for the two search operations, rewrite a key/value
//! parameter mapping into the service's flat query-string grammar.

/// Report kinds accepted by AirlineInsight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportType {
    /// Popularity of alternate routes between the airport pair
    AlternateRoutePopularity,
    /// Percentage of scheduled flights actually flown
    PercentageScheduledActuallyFlown,
    /// Passenger load factor of flights actually flown
    PassengerLoadFactorActuallyFlown,
    /// Carriers ranked by cargo weight
    CarriersByCargoWeight,
}

impl ReportType {
    /// The numeric code sent on the wire
    pub fn code(self) -> u8 {
        match self {
            ReportType::AlternateRoutePopularity => 1,
            ReportType::PercentageScheduledActuallyFlown => 2,
            ReportType::PassengerLoadFactorActuallyFlown => 3,
            ReportType::CarriersByCargoWeight => 4,
        }
    }
}

/// Parameters for AirlineFlightSchedules.
///
/// A missing `start_date` defaults to the clock reading at call time; a
/// missing `end_date` defaults to one day after the (possibly defaulted)
/// `start_date`, in that order.
#[derive(Debug, Clone, Default)]
pub struct FlightScheduleQuery {
    /// Window start, seconds since epoch
    pub start_date: Option<i64>,
    /// Window end, seconds since epoch
    pub end_date: Option<i64>,
    /// Origin airport filter
    pub origin: Option<String>,
    /// Destination airport filter
    pub destination: Option<String>,
    /// Operating airline filter
    pub airline: Option<String>,
    /// Flight number filter
    pub flightno: Option<String>,
    /// Result-set cap
    pub how_many: Option<u32>,
    /// Paging offset
    pub offset: Option<u32>,
}

impl FlightScheduleQuery {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window start, seconds since epoch
    pub fn start_date(mut self, secs: i64) -> Self {
        self.start_date = Some(secs);
        self
    }

    /// Set the window end, seconds since epoch
    pub fn end_date(mut self, secs: i64) -> Self {
        self.end_date = Some(secs);
        self
    }

    /// Filter by origin airport
    pub fn origin(mut self, code: impl Into<String>) -> Self {
        self.origin = Some(code.into());
        self
    }

    /// Filter by destination airport
    pub fn destination(mut self, code: impl Into<String>) -> Self {
        self.destination = Some(code.into());
        self
    }

    /// Filter by operating airline
    pub fn airline(mut self, code: impl Into<String>) -> Self {
        self.airline = Some(code.into());
        self
    }

    /// Filter by flight number
    pub fn flightno(mut self, number: impl Into<String>) -> Self {
        self.flightno = Some(number.into());
        self
    }

    /// Cap the result set
    pub fn how_many(mut self, count: u32) -> Self {
        self.how_many = Some(count);
        self
    }

    /// Set the paging offset
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Normalize into wire parameters, defaulting the date window against
    /// the supplied clock reading
    pub fn into_params_at(self, now: i64) -> Vec<(String, String)> {
        let start_date = self.start_date.unwrap_or(now);
        let end_date = self.end_date.unwrap_or(start_date + 86_400);

        let mut params = vec![
            ("startDate".to_string(), start_date.to_string()),
            ("endDate".to_string(), end_date.to_string()),
        ];
        if let Some(origin) = self.origin {
            params.push(("origin".to_string(), origin));
        }
        if let Some(destination) = self.destination {
            params.push(("destination".to_string(), destination));
        }
        if let Some(airline) = self.airline {
            params.push(("airline".to_string(), airline));
        }
        if let Some(flightno) = self.flightno {
            params.push(("flightno".to_string(), flightno));
        }
        if let Some(how_many) = self.how_many {
            params.push(("howMany".to_string(), how_many.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset".to_string(), offset.to_string()));
        }
        params
    }
}

/// Parameters for AirlineInsight.
///
/// A missing `report_type` defaults to the percentage of scheduled
/// flights actually flown (code `2`).
#[derive(Debug, Clone)]
pub struct AirlineInsightQuery {
    /// Origin airport code
    pub origin: String,
    /// Destination airport code
    pub destination: String,
    /// Report kind
    pub report_type: Option<ReportType>,
}

impl AirlineInsightQuery {
    /// Create a query for the given airport pair
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self { origin: origin.into(), destination: destination.into(), report_type: None }
    }

    /// Select a report kind
    pub fn report_type(mut self, report_type: ReportType) -> Self {
        self.report_type = Some(report_type);
        self
    }

    /// Normalize into wire parameters
    pub fn into_params(self) -> Vec<(String, String)> {
        let report_type =
            self.report_type.unwrap_or(ReportType::PercentageScheduledActuallyFlown);
        vec![
            ("origin".to_string(), self.origin),
            ("destination".to_string(), self.destination),
            ("reportType".to_string(), report_type.code().to_string()),
        ]
    }
}

/// Parameters for Search and SearchCount.
///
/// Accepts a literal query string, key/value parameters, or both; each
/// parameter serializes as `" -<key> <value>"` appended after any literal
/// text, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Literal query text
    pub query: Option<String>,
    /// Key/value parameters, serialized in insertion order
    pub parameters: Vec<(String, String)>,
    /// Result-set cap
    pub how_many: Option<u32>,
    /// Paging offset
    pub offset: Option<u32>,
}

impl SearchQuery {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the literal query text
    pub fn query(mut self, text: impl Into<String>) -> Self {
        self.query = Some(text.into());
        self
    }

    /// Append a key/value parameter
    pub fn parameter(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.parameters.push((key.into(), value.to_string()));
        self
    }

    /// Cap the result set
    pub fn how_many(mut self, count: u32) -> Self {
        self.how_many = Some(count);
        self
    }

    /// Set the paging offset
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Serialize into the service's flat query-string grammar
    pub fn serialized_query(&self) -> String {
        let mut text = self.query.clone().unwrap_or_default();
        for (key, value) in &self.parameters {
            text.push_str(&format!(" -{key} {value}"));
        }
        text
    }

    /// Normalize into wire parameters
    pub fn into_params(self) -> Vec<(String, String)> {
        let mut params = vec![("query".to_string(), self.serialized_query())];
        if let Some(how_many) = self.how_many {
            params.push(("howMany".to_string(), how_many.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset".to_string(), offset.to_string()));
        }
        params
    }
}

/// Parameters for SetAlert.
///
/// An `alert_id` of zero registers a new alert; a nonzero identifier
/// modifies the existing one.
#[derive(Debug, Clone, Default)]
pub struct AlertSpec {
    /// Alert to modify, `0` to create
    pub alert_id: i64,
    /// Flight identifier to watch
    pub ident: Option<String>,
    /// Origin airport filter
    pub origin: Option<String>,
    /// Destination airport filter
    pub destination: Option<String>,
    /// Aircraft type filter
    pub aircrafttype: Option<String>,
    /// Watch window start, seconds since epoch
    pub date_start: Option<i64>,
    /// Watch window end, seconds since epoch
    pub date_end: Option<i64>,
    /// Channel specification, for instance "16 e_filed e_departure"
    pub channels: Option<String>,
    /// Whether the alert is active
    pub enabled: bool,
    /// Weekly delivery cap
    pub max_weekly: Option<u32>,
}

impl AlertSpec {
    /// Create a spec that registers a new alert
    pub fn new() -> Self {
        Self { enabled: true, ..Self::default() }
    }

    /// Target an existing alert
    pub fn alert_id(mut self, id: i64) -> Self {
        self.alert_id = id;
        self
    }

    /// Watch a flight identifier
    pub fn ident(mut self, ident: impl Into<String>) -> Self {
        self.ident = Some(ident.into());
        self
    }

    /// Filter by origin airport
    pub fn origin(mut self, code: impl Into<String>) -> Self {
        self.origin = Some(code.into());
        self
    }

    /// Filter by destination airport
    pub fn destination(mut self, code: impl Into<String>) -> Self {
        self.destination = Some(code.into());
        self
    }

    /// Filter by aircraft type
    pub fn aircrafttype(mut self, code: impl Into<String>) -> Self {
        self.aircrafttype = Some(code.into());
        self
    }

    /// Set the watch window, seconds since epoch
    pub fn date_window(mut self, start: i64, end: i64) -> Self {
        self.date_start = Some(start);
        self.date_end = Some(end);
        self
    }

    /// Set the channel specification
    pub fn channels(mut self, spec: impl Into<String>) -> Self {
        self.channels = Some(spec.into());
        self
    }

    /// Enable or disable the alert
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Cap weekly deliveries
    pub fn max_weekly(mut self, cap: u32) -> Self {
        self.max_weekly = Some(cap);
        self
    }

    /// Normalize into wire parameters
    pub fn into_params(self) -> Vec<(String, String)> {
        let mut params = vec![("alert_id".to_string(), self.alert_id.to_string())];
        if let Some(ident) = self.ident {
            params.push(("ident".to_string(), ident));
        }
        if let Some(origin) = self.origin {
            params.push(("origin".to_string(), origin));
        }
        if let Some(destination) = self.destination {
            params.push(("destination".to_string(), destination));
        }
        if let Some(aircrafttype) = self.aircrafttype {
            params.push(("aircrafttype".to_string(), aircrafttype));
        }
        if let Some(date_start) = self.date_start {
            params.push(("date_start".to_string(), date_start.to_string()));
        }
        if let Some(date_end) = self.date_end {
            params.push(("date_end".to_string(), date_end.to_string()));
        }
        if let Some(channels) = self.channels {
            params.push(("channels".to_string(), channels));
        }
        params.push(("enabled".to_string(), self.enabled.to_string()));
        if let Some(max_weekly) = self.max_weekly {
            params.push(("max_weekly".to_string(), max_weekly.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
        params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_schedule_defaults_full_day_window() {
        let now = 1_442_008_560;
        let params = FlightScheduleQuery::new().into_params_at(now);
        let start: i64 = param(&params, "startDate").unwrap().parse().unwrap();
        let end: i64 = param(&params, "endDate").unwrap().parse().unwrap();
        assert_eq!(start, now);
        assert_eq!(end - start, 86_400);
    }

    #[test]
    fn test_schedule_end_follows_explicit_start() {
        let params = FlightScheduleQuery::new().start_date(1000).into_params_at(999_999);
        assert_eq!(param(&params, "startDate"), Some("1000"));
        assert_eq!(param(&params, "endDate"), Some("87400"));
    }

    #[test]
    fn test_schedule_explicit_window_untouched() {
        let params =
            FlightScheduleQuery::new().start_date(10).end_date(20).into_params_at(999_999);
        assert_eq!(param(&params, "startDate"), Some("10"));
        assert_eq!(param(&params, "endDate"), Some("20"));
    }

    #[test]
    fn test_schedule_optional_filters() {
        let params = FlightScheduleQuery::new()
            .origin("KSJC")
            .how_many(1)
            .into_params_at(0);
        assert_eq!(param(&params, "origin"), Some("KSJC"));
        assert_eq!(param(&params, "howMany"), Some("1"));
        assert_eq!(param(&params, "destination"), None);
    }

    #[test]
    fn test_insight_defaults_report_type() {
        let params = AirlineInsightQuery::new("SJC", "LAX").into_params();
        assert_eq!(param(&params, "reportType"), Some("2"));
        assert_eq!(param(&params, "origin"), Some("SJC"));
    }

    #[test]
    fn test_insight_explicit_report_type() {
        let params = AirlineInsightQuery::new("SJC", "LAX")
            .report_type(ReportType::CarriersByCargoWeight)
            .into_params();
        assert_eq!(param(&params, "reportType"), Some("4"));
    }

    #[test]
    fn test_search_parameters_serialize_in_order() {
        let query = SearchQuery::new().parameter("type", "B77*");
        assert!(query.serialized_query().ends_with(" -type B77*"));

        let query = SearchQuery::new()
            .parameter("belowAltitude", 100)
            .parameter("aboveGroundspeed", 200);
        assert_eq!(query.serialized_query(), " -belowAltitude 100 -aboveGroundspeed 200");
    }

    #[test]
    fn test_search_combines_literal_and_parameters() {
        let query = SearchQuery::new().query("-a b").parameter("c", "d");
        assert_eq!(query.serialized_query(), "-a b -c d");
    }

    #[test]
    fn test_search_into_params() {
        let params = SearchQuery::new()
            .query("-destination KLAX -prefix H")
            .how_many(1)
            .into_params();
        assert_eq!(param(&params, "query"), Some("-destination KLAX -prefix H"));
        assert_eq!(param(&params, "howMany"), Some("1"));
    }

    #[test]
    fn test_alert_spec_params() {
        let params = AlertSpec::new()
            .ident("N415PW")
            .channels("16 e_departure e_arrival")
            .max_weekly(5)
            .into_params();
        assert_eq!(param(&params, "alert_id"), Some("0"));
        assert_eq!(param(&params, "enabled"), Some("true"));
        assert_eq!(param(&params, "channels"), Some("16 e_departure e_arrival"));
        assert_eq!(param(&params, "max_weekly"), Some("5"));
    }
}
