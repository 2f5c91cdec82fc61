use crate::core::Config;
use crate::printing::{CompanyInfo, PdfRenderer};

/// 服务器状态 - 持有所有请求共享的只读数据
///
/// 计价引擎是纯函数, 不需要任何共享可变状态。
/// 所有字段克隆成本都很低, 每个请求拿到一份副本。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | company | CompanyInfo | 报价单抬头 |
/// | pdf | PdfRenderer | PDF 渲染器 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 报价单抬头信息
    pub company: CompanyInfo,
    /// PDF 渲染器 (字体目录来自配置)
    pub pdf: PdfRenderer,
}

impl ServerState {
    /// 根据配置创建服务器状态
    pub fn new(config: Config) -> Self {
        let company = CompanyInfo {
            name: config.company_name.clone(),
            address: config.company_address.clone(),
            vat_id: config.company_vat_id.clone(),
        };
        let pdf = PdfRenderer::new(&config.font_dir, &config.font_family);

        if !pdf.font_dir().is_dir() {
            tracing::warn!(
                font_dir = %config.font_dir,
                "Font directory not found, PDF export will fail"
            );
        }

        Self {
            config,
            company,
            pdf,
        }
    }
}
