use serde::{Deserialize, Serialize};

/// Company profile shown across the public site (header, footer, contact page,
/// home banner).
///
/// `Default` is the built-in profile used until the API answers, and as the
/// fallback for any field the API leaves empty.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct CompanyInfo {
    pub name: String,
    pub short_name: Option<String>,
    pub logo: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub wechat: Option<String>,
    pub business_hours: Option<String>,
    pub description: Option<String>,
    /// Home page carousel images, in display order.
    pub banner_images: Vec<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            name: "福建省宜然焕新科技有限公司".to_string(),
            short_name: Some("宜然焕新".to_string()),
            logo: None,
            phone: "400-888-8888".to_string(),
            email: Some("service@yiran-huanxin.com".to_string()),
            address: Some("福建省福州市".to_string()),
            wechat: Some("yiran-huanxin".to_string()),
            business_hours: Some("周一至周日 8:00-20:00".to_string()),
            description: Some(
                "专业墙面翻新、旧房改造服务商，使用三棵树环保涂料，让您当天入住".to_string(),
            ),
            banner_images: Vec::new(),
            latitude: Some(26.0745),
            longitude: Some(119.2965),
        }
    }
}

/// Company profile as returned by `GET /company`. Every field may be missing
/// or null.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct CompanyResponse {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub logo: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub wechat: Option<String>,
    pub business_hours: Option<String>,
    pub description: Option<String>,
    pub banner_images: Option<Vec<String>>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl CompanyInfo {
    /// Overlays the API profile on the built-in defaults. Present values win;
    /// missing ones keep the default. A zero coordinate counts as missing.
    pub fn merged(remote: CompanyResponse) -> Self {
        let defaults = Self::default();
        let coordinate = |value: Option<f64>, fallback: Option<f64>| {
            value.filter(|v| *v != 0.0).or(fallback)
        };

        Self {
            name: remote.name.unwrap_or(defaults.name),
            short_name: remote.short_name.or(defaults.short_name),
            logo: remote.logo.or(defaults.logo),
            phone: remote.phone.unwrap_or(defaults.phone),
            email: remote.email.or(defaults.email),
            address: remote.address.or(defaults.address),
            wechat: remote.wechat.or(defaults.wechat),
            business_hours: remote.business_hours.or(defaults.business_hours),
            description: remote.description.or(defaults.description),
            banner_images: remote.banner_images.unwrap_or_default(),
            latitude: coordinate(remote.latitude, defaults.latitude),
            longitude: coordinate(remote.longitude, defaults.longitude),
        }
    }

    /// Short name for compact places such as the header, falling back to the
    /// full name.
    pub fn display_name(&self) -> &str {
        self.short_name.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_values_override_defaults() {
        let remote: CompanyResponse = serde_json::from_str(
            r#"{"id":1,"name":"马上住装饰","phone":"0591-123456","banner_images":["/uploads/1.jpg","/uploads/2.jpg"]}"#,
        )
        .unwrap();
        let company = CompanyInfo::merged(remote);

        assert_eq!(company.name, "马上住装饰");
        assert_eq!(company.phone, "0591-123456");
        assert_eq!(company.banner_images.len(), 2);
        assert_eq!(company.wechat.as_deref(), Some("yiran-huanxin"));
    }

    #[test]
    fn null_banners_and_zero_coordinates_fall_back() {
        let remote: CompanyResponse = serde_json::from_str(
            r#"{"banner_images":null,"latitude":0.0,"longitude":null}"#,
        )
        .unwrap();
        let company = CompanyInfo::merged(remote);

        assert!(company.banner_images.is_empty());
        assert_eq!(company.latitude, Some(26.0745));
        assert_eq!(company.longitude, Some(119.2965));
    }

    #[test]
    fn display_name_prefers_short_name() {
        let mut company = CompanyInfo::default();
        assert_eq!(company.display_name(), "宜然焕新");
        company.short_name = None;
        assert_eq!(company.display_name(), "福建省宜然焕新科技有限公司");
    }
}
