pub const PAGE: &str = "w-full h-full overflow-y-auto overflow-x-hidden font-sans bg-white text-gray-900";
pub const SECTION: &str = "py-16 px-4 md:px-6 lg:px-8";
pub const SECTION_INNER: &str = "max-w-6xl mx-auto";
pub const SECTION_HEADER: &str = "text-center mb-12";

pub const BRAND_GRADIENT: &str = "text-2xl font-bold bg-gradient-to-r from-orange-500 to-yellow-500 bg-clip-text text-transparent";
pub const HEADING_XL: &str = "text-4xl md:text-5xl lg:text-6xl font-bold mb-6 bg-gradient-to-r from-orange-600 via-orange-500 to-yellow-500 bg-clip-text text-transparent";
pub const HEADING_LG: &str = "text-3xl md:text-4xl font-bold mb-6";
pub const HEADING_MD: &str = "text-2xl font-bold mb-2";
pub const HEADING_SM: &str = "text-xl font-bold mb-1";
pub const TEXT_LEAD: &str = "text-xl text-gray-600 max-w-2xl mx-auto";
pub const TEXT_BODY: &str = "text-gray-600";
pub const TEXT_MUTED: &str = "text-gray-500 text-sm";

pub const NAV_LINK: &str = "text-gray-700 hover:text-orange-500 transition-colors";
pub const FOOTER_LINK: &str = "text-gray-400 hover:text-white transition-colors";

pub const CARD: &str = "bg-white rounded-xl p-6 shadow-md hover:shadow-lg transition-shadow border border-gray-100";
pub const CARD_BANNER: &str = "rounded-xl overflow-hidden bg-white shadow-md border border-gray-100";
pub const BADGE: &str = "inline-block px-3 py-1 bg-white/20 rounded-full text-sm font-medium";

pub const LABEL: &str = "flex items-center text-gray-700 mb-2";
pub const INPUT_BASE: &str = "w-full p-3 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-orange-500";
pub const INPUT_COMPACT: &str = "w-full p-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-orange-500";

pub const BUTTON_BASE: &str = "font-medium text-white transition-all duration-300";
pub const BUTTON_PRIMARY: &str = "px-8 py-4 rounded-full bg-gradient-to-r from-orange-500 to-yellow-500 text-lg shadow-lg hover:shadow-xl transform hover:-translate-y-1 inline-flex items-center";
pub const BUTTON_SOLID: &str = "px-6 py-3 rounded-md bg-orange-500 hover:bg-orange-600";
pub const BUTTON_OUTLINE: &str = "px-6 py-3 rounded-full bg-transparent border-2 border-white text-base md:text-lg hover:bg-white/10";
pub const BUTTON_ICON: &str = "p-2 rounded-md text-gray-700 hover:bg-gray-100 focus:outline-none";

pub const GRADIENT_WARM: &str = "bg-gradient-to-br from-orange-500 to-yellow-500";
pub const GRADIENT_VIOLET: &str = "bg-gradient-to-br from-purple-500 to-pink-500";
pub const GRADIENT_GREEN: &str = "bg-gradient-to-br from-teal-500 to-green-500";

pub const PANEL_SUCCESS: &str = "bg-green-50 border border-green-200 rounded-xl p-8 text-center";
pub const PANEL_FORM: &str = "bg-gray-50 rounded-xl p-6 md:p-8 shadow-md";
pub const MODAL_BACKDROP: &str = "fixed inset-0 flex items-center justify-center z-50 bg-black bg-opacity-50";
pub const MODAL: &str = "bg-white rounded-lg w-full max-w-md mx-4 p-6 shadow-xl";

pub fn combine_classes(base: &str, additional: &str) -> String {
    format!("{} {}", base, additional)
}

pub fn button(variant: &str) -> String {
    combine_classes(BUTTON_BASE, variant)
}
