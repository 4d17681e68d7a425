use super::{Outcome, Report};
use clap::{Parser, ValueEnum};
use finguard_core::{
    error::Error,
    mask_account_number, mask_card_number,
    state::State,
    validation::{self, AgeResult, AgeValidator, DEFAULT_MIN_AGE, StrengthPolicy, Validator},
};

/// Validate a single value.
#[derive(Parser)]
#[clap(name = "check")]
pub(crate) struct Check {
    /// Field type.
    #[clap(value_enum)]
    kind: CheckKind,
    /// Value to validate.
    value: String,
    /// Date format hint for `date` and `age`, e.g. `%d/%m/%Y`.
    #[clap(long)]
    format: Option<String>,
    /// Minimum age for `age`.
    #[clap(long)]
    min_age: Option<u32>,
}

/// Field types accepted by `check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CheckKind {
    Email,
    Phone,
    Ssn,
    CreditCard,
    BankAccount,
    RoutingNumber,
    Currency,
    Password,
    Date,
    Age,
    Url,
    Ip,
}

impl Check {
    /// Runs the `check` subcommand.
    pub(crate) fn run(self, state: &State) -> Result<Outcome, Error> {
        let value = self.value.as_str();
        let format = self.format.as_deref();
        match self.kind {
            CheckKind::CreditCard => {
                let masked = mask_card_number(value);
                tracing::debug!(kind = ?self.kind, value = %masked, "checking a single value");
            }
            CheckKind::Ssn | CheckKind::BankAccount | CheckKind::RoutingNumber => {
                let masked = mask_account_number(value);
                tracing::debug!(kind = ?self.kind, value = %masked, "checking a single value");
            }
            _ => tracing::debug!(kind = ?self.kind, "checking a single value"),
        }
        match self.kind {
            CheckKind::Email => validation::validate_email(value).print(),
            CheckKind::Phone => validation::validate_phone(value).print(),
            CheckKind::Ssn => validation::validate_ssn(value).print(),
            CheckKind::CreditCard => validation::validate_credit_card(value).print(),
            CheckKind::BankAccount => validation::validate_bank_account(value).print(),
            CheckKind::RoutingNumber => validation::validate_routing_number(value).print(),
            CheckKind::Currency => validation::validate_currency(value).print(),
            CheckKind::Password => {
                let policy = StrengthPolicy::new(state.security().password);
                validation::validate_password(value, &policy).print()
            }
            CheckKind::Date => validation::validate_date(value, format).print(),
            CheckKind::Age => {
                let mut validator = AgeValidator::new(self.min_age.unwrap_or(DEFAULT_MIN_AGE));
                if let Some(format) = format {
                    validator = validator.with_format(format);
                }
                AgeResult::from(validator.validate(value)).print()
            }
            CheckKind::Url => validation::validate_url(value).print(),
            CheckKind::Ip => validation::validate_ip_address(value).print(),
        }
    }
}
