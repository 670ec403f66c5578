//! MCP tool handlers for the intake server.
//!
//! This module exposes the booking and contact forms as MCP tools using the
//! rmcp SDK's tool_router pattern.

use crate::message::{BUDGET_RANGES, SERVICES};
use crate::metrics::Metrics;
use crate::models::{FormSchema, FormSubmission};
use crate::services::{IntakeService, REJECTED_TEXT};
use crate::IntakeError;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;

/// The MCP server that takes booking and contact submissions.
#[derive(Clone)]
pub struct IntakeMcpServer {
    intake_service: Arc<dyn IntakeService>,
    metrics: Metrics,
    redirect_delay: Duration,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for IntakeMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "site-intake".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Takes drone-service booking requests and contact messages, validates them, and prepares a WhatsApp deep link carrying the formatted message.".into()),
        }
    }
}

/// Booking form fields. All optional here so that missing fields are
/// reported as field errors rather than as malformed tool input.
#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct BookingToolParams {
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    /// Service code, see `list_services`
    #[serde(default)]
    service: Option<String>,
    /// YYYY-MM-DD, today or later
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    time: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    description: Option<String>,
    /// Budget code, see `list_budget_ranges`
    #[serde(default)]
    budget: Option<String>,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct ContactToolParams {
    #[serde(default)]
    contact_name: Option<String>,
    #[serde(default)]
    contact_email: Option<String>,
    #[serde(default)]
    subject: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Build a submission from the fields the caller actually sent.
fn submission_from(
    schema: FormSchema,
    fields: impl IntoIterator<Item = (&'static str, Option<String>)>,
) -> FormSubmission {
    FormSubmission::from_pairs(
        schema,
        fields
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name, v))),
    )
}

impl From<BookingToolParams> for FormSubmission {
    fn from(p: BookingToolParams) -> Self {
        submission_from(
            FormSchema::Booking,
            [
                ("fullName", p.full_name),
                ("email", p.email),
                ("phone", p.phone),
                ("service", p.service),
                ("date", p.date),
                ("time", p.time),
                ("location", p.location),
                ("description", p.description),
                ("budget", p.budget),
            ],
        )
    }
}

impl From<ContactToolParams> for FormSubmission {
    fn from(p: ContactToolParams) -> Self {
        submission_from(
            FormSchema::Contact,
            [
                ("contactName", p.contact_name),
                ("contactEmail", p.contact_email),
                ("subject", p.subject),
                ("message", p.message),
            ],
        )
    }
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_result(value: &serde_json::Value) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(value).map_err(to_mcp_error)?,
    )]))
}

// Tool router implementation
#[tool_router]
impl IntakeMcpServer {
    /// Create a new intake MCP server.
    pub fn new(
        intake_service: Arc<dyn IntakeService>,
        metrics: Metrics,
        redirect_delay: Duration,
    ) -> Self {
        Self {
            intake_service,
            metrics,
            redirect_delay,
            tool_router: Self::tool_router(),
        }
    }

    /// Run a submission and shape the outcome for the tool caller.
    fn handle_submission(
        &self,
        submission: FormSubmission,
    ) -> Result<CallToolResult, McpError> {
        match self.intake_service.submit(&submission) {
            Ok(submitted) => {
                let response = serde_json::json!({
                    "status": "accepted",
                    "form": submitted.prepared.schema,
                    "notice": submitted.notice.text,
                    "message": submitted.prepared.message,
                    "deep_link": submitted.prepared.link,
                    "redirect_after_ms": self.redirect_delay.as_millis() as u64,
                });
                json_result(&response)
            }
            Err(IntakeError::Rejected(report)) => {
                let errors: serde_json::Map<String, serde_json::Value> = report
                    .errors()
                    .map(|(field, err)| (field.to_string(), serde_json::json!(err.to_string())))
                    .collect();
                let response = serde_json::json!({
                    "status": "rejected",
                    "form": report.schema,
                    "notice": REJECTED_TEXT,
                    "errors": errors,
                });
                Ok(CallToolResult::error(vec![Content::text(
                    serde_json::to_string_pretty(&response).map_err(to_mcp_error)?,
                )]))
            }
            Err(e) => {
                tracing::error!("Failed to submit form: {:?}", e);
                Err(to_mcp_error(e))
            }
        }
    }

    /// Submit a drone service booking request.
    #[tool(
        description = "Submit a drone service booking request. Required: fullName, email, phone, service, date (YYYY-MM-DD, today or later), time, location. Optional: description, budget. On success returns the formatted message and a WhatsApp deep link that is opened after a short delay; on failure returns every failing field with its error."
    )]
    async fn submit_booking(
        &self,
        params: Parameters<BookingToolParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("MCP Handler: submit_booking called");
        self.handle_submission(params.0.into())
    }

    /// Submit a general contact message.
    #[tool(
        description = "Send a general contact message. Required: contactName, contactEmail, subject, message. On success returns the formatted message and a WhatsApp deep link; on failure returns every failing field with its error."
    )]
    async fn submit_contact(
        &self,
        params: Parameters<ContactToolParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("MCP Handler: submit_contact called");
        self.handle_submission(params.0.into())
    }

    /// List the bookable services.
    #[tool(description = "List the service codes accepted by submit_booking with their display names")]
    async fn list_services(&self) -> Result<CallToolResult, McpError> {
        let services: Vec<_> = SERVICES.entries().collect();
        json_result(&serde_json::json!({ "services": services }))
    }

    /// List the budget ranges.
    #[tool(description = "List the budget codes accepted by submit_booking with their display labels")]
    async fn list_budget_ranges(&self) -> Result<CallToolResult, McpError> {
        let ranges: Vec<_> = BUDGET_RANGES.entries().collect();
        json_result(&serde_json::json!({ "budget_ranges": ranges }))
    }

    /// Earliest date a booking may request.
    #[tool(description = "Get the earliest date (YYYY-MM-DD) a booking may be requested for")]
    async fn min_booking_date(&self) -> Result<CallToolResult, McpError> {
        json_result(&serde_json::json!({
            "min_date": self.intake_service.min_booking_date(),
        }))
    }

    /// Intake counters since startup.
    #[tool(description = "Get counts of accepted and rejected submissions and dispatched redirects since startup")]
    async fn intake_metrics(&self) -> Result<CallToolResult, McpError> {
        let summary = serde_json::to_value(self.metrics.summary()).map_err(to_mcp_error)?;
        json_result(&summary)
    }
}
