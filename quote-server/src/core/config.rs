/// 服务器配置 - 报价服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (启动时先加载可选的 `.env`)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志目录, 存在时按天滚动写入文件 |
/// | FONT_DIR | ./fonts | PDF 字体目录 |
/// | FONT_FAMILY | LiberationSans | PDF 字体族 |
/// | COMPANY_NAME | (空) | 报价单抬头 |
/// | COMPANY_ADDRESS | (无) | 公司地址 |
/// | COMPANY_VAT_ID | (无) | 增值税号 |
/// | DEFAULT_FEE_VAT_RATE | 0 | 运费/安装费默认税率 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 FONT_DIR=/usr/share/fonts/liberation cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别: trace | debug | info | warn | error
    pub log_level: String,
    /// 日志目录 (None 时只输出到控制台)
    pub log_dir: Option<String>,

    // === 报价单输出 ===
    /// 字体目录, 需包含 {family}-Regular/Bold/Italic/BoldItalic.ttf
    pub font_dir: String,
    pub font_family: String,
    pub company_name: String,
    pub company_address: Option<String>,
    pub company_vat_id: Option<String>,

    // === 计价 ===
    /// 请求未提供 feeVatRate 时使用的税率 (百分比)
    pub default_fee_vat_rate: f64,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
}

fn optional_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: optional_var("LOG_DIR"),

            font_dir: std::env::var("FONT_DIR").unwrap_or_else(|_| "./fonts".into()),
            font_family: std::env::var("FONT_FAMILY").unwrap_or_else(|_| "LiberationSans".into()),
            company_name: std::env::var("COMPANY_NAME").unwrap_or_default(),
            company_address: optional_var("COMPANY_ADDRESS"),
            company_vat_id: optional_var("COMPANY_VAT_ID"),

            default_fee_vat_rate: std::env::var("DEFAULT_FEE_VAT_RATE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v: &f64| v.is_finite() && *v >= 0.0)
                .unwrap_or(0.0),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(http_port: u16, font_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.font_dir = font_dir.into();
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.request_timeout_ms)
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
    fn test_with_overrides() {
        let config = Config::with_overrides(4100, "/tmp/fonts");
        assert_eq!(config.http_port, 4100);
        assert_eq!(config.font_dir, "/tmp/fonts");
        assert!(config.default_fee_vat_rate >= 0.0);
    }

    #[test]
    fn test_environment_flags() {
        let mut config = Config::default();
        config.environment = "production".to_string();
        assert!(config.is_production());
        assert!(!config.is_development());
    }

    #[test]
    fn test_request_timeout() {
        let mut config = Config::default();
        config.request_timeout_ms = 1500;
        assert_eq!(config.request_timeout(), std::time::Duration::from_millis(1500));
    }
}
