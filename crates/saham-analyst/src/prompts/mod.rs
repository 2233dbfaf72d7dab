//! The fixed analysis prompt
//!
//! The Indonesian template is the canonical one; an English variant exists
//! for callers that ask for it, and rendering falls back to Indonesian for
//! any other language.

use saham_prompt::{JinjaTemplate, PromptError};

const ANALYSIS_PROMPT_ID: &str = "stock_analysis";

const ANALYSIS_TEMPLATE_IDN: &str = "\
Berdasarkan data saham berikut ini:

Nama Perusahaan: {{ name }}
Sektor: {{ sector }}
Industri: {{ industry }}
Harga Saat Ini: {{ current_price }} {{ currency }}
Market Cap: {{ market_cap }}
P/E Ratio: {{ pe_ratio }}
Dividend Yield: {{ dividend_yield }}

Deskripsi Bisnis:
{{ description }}

Tolong berikan analisis komprehensif tentang perusahaan ini dalam Bahasa Indonesia yang mencakup:
1. Gambaran umum bisnis dan posisinya di industri
2. Kinerja keuangan berdasarkan metrik yang tersedia
3. Potensi dan risiko investasi

Analisis:";

const ANALYSIS_TEMPLATE_EN: &str = "\
Based on the following stock data:

Company Name: {{ name }}
Sector: {{ sector }}
Industry: {{ industry }}
Current Price: {{ current_price }} {{ currency }}
Market Cap: {{ market_cap }}
P/E Ratio: {{ pe_ratio }}
Dividend Yield: {{ dividend_yield }}

Business Description:
{{ description }}

Please provide a comprehensive analysis of this company covering:
1. Business overview and its position in the industry
2. Financial performance based on the available metrics
3. Investment potential and risks

Analysis:";

/// Build the stock analysis prompt template
pub fn stock_analysis_prompt() -> Result<JinjaTemplate, PromptError> {
    JinjaTemplate::bilingual(ANALYSIS_PROMPT_ID, ANALYSIS_TEMPLATE_EN, ANALYSIS_TEMPLATE_IDN)
}
