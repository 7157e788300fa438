//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entities::{GradingRequest, GradingResult, Ticket, TicketResult};
use crate::domain::value_objects::LottoNumbers;

// ============================================================================
// Number rows
// ============================================================================

/// Request for POST /lotto
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LottoRequest {
    pub numbers: Vec<Vec<i32>>,
}

/// Response for GET /lotto and POST /lotto
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LottoResponse {
    pub numbers: Vec<Vec<i32>>,
}

// ============================================================================
// Result checking
// ============================================================================

/// Winning numbers (or a ticket's echoed `correctNumbers`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LottoNumbersDto {
    pub numbers: Vec<i32>,
    pub bonus_number: i32,
}

/// A played ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketDto {
    pub numbers: Vec<i32>,
    pub correct_numbers: LottoNumbersDto,
}

/// One element of the POST /lotto/check request array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LottoCheckRequest {
    pub index: i32,
    pub winning_numbers: LottoNumbersDto,
    pub results: Vec<TicketDto>,
}

/// A ticket with its `result` label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketResultDto {
    pub numbers: Vec<i32>,
    pub correct_numbers: LottoNumbersDto,
    #[schema(example = "2nd place")]
    pub result: String,
}

/// One element of the POST /lotto/check response array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LottoCheckResponse {
    pub index: i32,
    pub winning_numbers: LottoNumbersDto,
    pub results: Vec<TicketResultDto>,
}

// ============================================================================
// Conversions
// ============================================================================

impl From<LottoNumbersDto> for LottoNumbers {
    fn from(dto: LottoNumbersDto) -> Self {
        LottoNumbers::new(dto.numbers, dto.bonus_number)
    }
}

impl From<LottoNumbers> for LottoNumbersDto {
    fn from(numbers: LottoNumbers) -> Self {
        Self {
            numbers: numbers.numbers,
            bonus_number: numbers.bonus_number,
        }
    }
}

impl From<LottoCheckRequest> for GradingRequest {
    fn from(dto: LottoCheckRequest) -> Self {
        GradingRequest {
            index: dto.index,
            winning_numbers: dto.winning_numbers.into(),
            tickets: dto
                .results
                .into_iter()
                .map(|t| Ticket::new(t.numbers, t.correct_numbers.into()))
                .collect(),
        }
    }
}

impl From<TicketResult> for TicketResultDto {
    fn from(result: TicketResult) -> Self {
        Self {
            numbers: result.numbers,
            correct_numbers: result.correct_numbers.into(),
            result: result.rank.label().to_string(),
        }
    }
}

impl From<GradingResult> for LottoCheckResponse {
    fn from(result: GradingResult) -> Self {
        Self {
            index: result.index,
            winning_numbers: result.winning_numbers.into(),
            results: result.results.into_iter().map(Into::into).collect(),
        }
    }
}
