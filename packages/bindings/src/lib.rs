use napi::Result as NapiResult;
use napi_derive::napi;

use mortgage_core::loan::LoanInput;
use mortgage_core::schedule::ScheduleRow;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Full repayment analysis: summary metrics, monthly schedule, yearly rollup.
#[napi]
pub fn calculate_repayments(input_json: String) -> NapiResult<String> {
    let input: LoanInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = mortgage_core::analysis::calculate_repayments(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Month-by-month amortisation schedule only.
#[napi]
pub fn build_schedule(input_json: String) -> NapiResult<String> {
    let input: LoanInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    input.validate().map_err(to_napi_error)?;

    let terms = input.terms();
    let payment =
        mortgage_core::payment::monthly_payment(terms.loan_amount, terms.monthly_rate, terms.num_payments)
            .map_err(to_napi_error)?;
    let rows = mortgage_core::schedule::build_schedule(
        terms.loan_amount,
        terms.monthly_rate,
        payment,
        terms.num_payments,
        input.start_date,
    );
    serde_json::to_string(&rows).map_err(to_napi_error)
}

/// Yearly aggregation of an existing schedule.
#[napi]
pub fn aggregate_by_year(schedule_json: String) -> NapiResult<String> {
    let rows: Vec<ScheduleRow> = serde_json::from_str(&schedule_json).map_err(to_napi_error)?;
    let yearly = mortgage_core::yearly::aggregate_by_year(&rows);
    serde_json::to_string(&yearly).map_err(to_napi_error)
}
