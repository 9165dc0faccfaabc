// self
use crate::obs::{EndpointKind, RequestOutcome};

/// Records a dispatch outcome via the global metrics recorder (when enabled).
pub fn record_request_outcome(kind: EndpointKind, outcome: RequestOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"bbuddy_api_request_total",
			"endpoint" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}
