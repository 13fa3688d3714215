use std::path::PathBuf;

use chrono_tz::Tz;

/// Storefront configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | Working directory (history database, logs) |
/// | HISTORY_DB | {WORK_DIR}/orders.redb | Local order history file |
/// | STORE_NAME | Maite Sweet Treats | Name used in chat messages |
/// | CHAT_NUMBER | 27820483902 | Chat number orders are sent to |
/// | CURRENCY_SYMBOL | R | Prefix for amounts |
/// | STORE_TIMEZONE | Africa/Johannesburg | Timezone for order times |
/// | PAYMENT_ACCOUNT_NAME | M Mthembu | Bank transfer details |
/// | PAYMENT_ACCOUNT_NUMBER | 1234567890 | |
/// | PAYMENT_BANK | Capitec Bank | |
/// | PAYMENT_BRANCH_CODE | 470010 | |
/// | LOG_LEVEL | info | Log level |
/// | LOG_DIR | (stdout) | Daily rolling log directory |
///
/// # Example
///
/// ```ignore
/// CHAT_NUMBER=27821112222 STORE_NAME="Cake Corner" my-host
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory
    pub work_dir: String,
    /// Local order history database path
    pub history_db: PathBuf,
    /// Store name shown in messages
    pub store_name: String,
    /// Chat number (international, digits only)
    pub chat_number: String,
    /// Currency prefix, e.g. "R"
    pub currency_symbol: String,
    /// Business timezone for timestamps in messages
    pub timezone: Tz,
    /// Bank transfer details printed in every order message
    pub payment: PaymentDetails,
    /// Log level
    pub log_level: String,
    /// Log directory (None = stdout)
    pub log_dir: Option<String>,
}

/// Bank transfer instructions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentDetails {
    pub account_name: String,
    pub account_number: String,
    pub bank: String,
    pub branch_code: String,
}

impl Default for PaymentDetails {
    fn default() -> Self {
        Self {
            account_name: "M Mthembu".into(),
            account_number: "1234567890".into(),
            bank: "Capitec Bank".into(),
            branch_code: "470010".into(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults. An unknown timezone is logged
    /// and replaced by the default one.
    pub fn from_env() -> Self {
        let work_dir = env_or("WORK_DIR", "./data");
        let history_db = std::env::var("HISTORY_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(&work_dir).join("orders.redb"));

        let tz_name = env_or("STORE_TIMEZONE", "Africa/Johannesburg");
        let timezone = tz_name.parse::<Tz>().unwrap_or_else(|_| {
            tracing::error!(timezone = %tz_name, "Unknown STORE_TIMEZONE, using Africa/Johannesburg");
            chrono_tz::Africa::Johannesburg
        });

        let defaults = PaymentDetails::default();

        Self {
            work_dir,
            history_db,
            store_name: env_or("STORE_NAME", "Maite Sweet Treats"),
            chat_number: env_or("CHAT_NUMBER", "27820483902"),
            currency_symbol: env_or("CURRENCY_SYMBOL", "R"),
            timezone,
            payment: PaymentDetails {
                account_name: env_or("PAYMENT_ACCOUNT_NAME", &defaults.account_name),
                account_number: env_or("PAYMENT_ACCOUNT_NUMBER", &defaults.account_number),
                bank: env_or("PAYMENT_BANK", &defaults.bank),
                branch_code: env_or("PAYMENT_BRANCH_CODE", &defaults.branch_code),
            },
            log_level: env_or("LOG_LEVEL", "info"),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Override the working directory (history path follows it)
    pub fn with_overrides(work_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.history_db = PathBuf::from(&config.work_dir).join("orders.redb");
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_overrides_moves_history_db() {
        let config = Config::with_overrides("/tmp/shop");
        assert_eq!(config.work_dir, "/tmp/shop");
        assert_eq!(config.history_db, PathBuf::from("/tmp/shop/orders.redb"));
    }

    #[test]
    fn test_default_payment_details() {
        let details = PaymentDetails::default();
        assert_eq!(details.bank, "Capitec Bank");
        assert_eq!(details.branch_code, "470010");
    }
}
