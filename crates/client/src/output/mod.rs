//! Output formatting functions.

pub mod pretty;
pub mod terminal;

use memberdb_core::account::{FieldErrors, FormValues, NewUserRequest};
use memberdb_core::auth::CallerIdentity;
use memberdb_core::notice::Notice;
use memberdb_core::routes::Route;
use memberdb_core::views::StaticView;
use serde_json::json;

use crate::cli::OutputFormat;

/// Format a value as a single JSON line.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Writes console output in the selected format.
///
/// Pretty output goes to stdout except where noted; JSON output is one object
/// per line so it can be piped.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Printer {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn identity(&self, identity: &CallerIdentity) {
        match self.format {
            OutputFormat::Json => println!("{}", format_json(identity)),
            OutputFormat::Pretty => println!("{}", pretty::format_identity(identity)),
        }
    }

    pub fn notice(&self, notice: &Notice) {
        match self.format {
            OutputFormat::Json => println!("{}", format_json(notice)),
            OutputFormat::Pretty => println!("{}", pretty::format_notice(notice)),
        }
    }

    /// Validation messages go to stderr in pretty mode.
    pub fn field_errors(&self, errors: &FieldErrors) {
        match self.format {
            OutputFormat::Json => println!("{}", format_json(&json!({ "errors": errors }))),
            OutputFormat::Pretty => eprintln!("{}", pretty::format_field_errors(errors)),
        }
    }

    pub fn view(&self, view: &StaticView) {
        match self.format {
            OutputFormat::Json => println!("{}", format_json(view)),
            OutputFormat::Pretty => println!("{}", pretty::format_view(view)),
        }
    }

    pub fn request(&self, request: &NewUserRequest) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Json => println!("{}", format_json(&json!({ "request": request }))),
            OutputFormat::Pretty => println!(
                "Adding {} {} <{}> ({}, admin: {})",
                request.first, request.last, request.bu_email, request.class, request.is_admin
            ),
        }
    }

    /// Page header with the breadcrumb trail. Pretty mode only.
    pub fn header(&self, route: Route) {
        if self.quiet || matches!(self.format, OutputFormat::Json) {
            return;
        }
        println!("{}\n{}\n", route.label(), pretty::format_breadcrumbs(route));
    }

    /// Current form contents. Pretty mode only.
    pub fn form(&self, values: &FormValues, errors: &FieldErrors) {
        if self.quiet || matches!(self.format, OutputFormat::Json) {
            return;
        }
        print!("{}", pretty::format_form(values, errors));
    }
}
