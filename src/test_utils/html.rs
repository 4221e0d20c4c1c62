//! HTML page builders mirroring the AiSEG2 pages the extractors read.

use scraper::Html;

/// Wraps `content` in a minimal document and parses it.
pub fn create_html_document(content: &str) -> Html {
    Html::parse_document(&format!(r#"<html><body>{}</body></html>"#, content))
}

fn wrap(content: &str) -> String {
    format!(r#"<html><body>{}</body></html>"#, content)
}

/// Builder for the electricity flow page (`/page/electricflow/111`).
#[derive(Debug, Default)]
pub struct PowerFlowPageBuilder {
    generation: String,
    usage: String,
    sources: Vec<(usize, String, String)>,
}

impl PowerFlowPageBuilder {
    pub fn new(generation: &str, usage: &str) -> Self {
        Self {
            generation: generation.to_string(),
            usage: usage.to_string(),
            sources: Vec::new(),
        }
    }

    /// Adds a generation source in detail slot `index` (1..=3).
    pub fn add_source(mut self, index: usize, title: &str, capacity: &str) -> Self {
        self.sources
            .push((index, title.to_string(), capacity.to_string()));
        self
    }

    pub fn build(self) -> String {
        let mut content = format!(
            r#"<div id="g_capacity">{}</div><div id="u_capacity">{}</div>"#,
            self.generation, self.usage
        );
        for (index, title, capacity) in self.sources {
            content.push_str(&format!(
                r#"<div id="g_d_{}_title"><span>{}</span></div><div id="g_d_{}_capacity"><span>{}</span></div>"#,
                index, title, index, capacity
            ));
        }
        wrap(&content)
    }
}

/// Builder for one page of the device listing (`/page/electricflow/1113`).
#[derive(Debug, Default)]
pub struct DeviceListPageBuilder {
    devices: Vec<(usize, String, String)>,
}

impl DeviceListPageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a device in slot `index` (1..=10).
    pub fn add_device(mut self, index: usize, device: &str, value: &str) -> Self {
        self.devices
            .push((index, device.to_string(), value.to_string()));
        self
    }

    /// Fills slots 1.. with the given devices in order.
    pub fn with_devices(devices: &[(&str, &str)]) -> Self {
        devices
            .iter()
            .enumerate()
            .fold(Self::new(), |builder, (i, (device, value))| {
                builder.add_device(i + 1, device, value)
            })
    }

    pub fn build(self) -> String {
        let content: String = self
            .devices
            .into_iter()
            .map(|(index, device, value)| {
                format!(
                    r#"<div id="stage_{}"><div class="c_device"><span>{}</span></div><div class="c_value"><span>{}</span></div></div>"#,
                    index, device, value
                )
            })
            .collect();
        wrap(&content)
    }
}

/// A report page holding a single `#val_kwh` value.
pub fn create_val_kwh_html(value: &str) -> String {
    wrap(&format!(r#"<div id="val_kwh">{}</div>"#, value))
}

/// The circuit settings page with `script` embedded as its onload script.
pub fn create_settings_html(script: &str) -> String {
    wrap(&format!(
        r#"<script src="/js/common.js"></script><script>{}</script>"#,
        script
    ))
}

/// An onload script passing `circuits` as `(strBtnType, strId, strCircuit)`.
pub fn create_circuit_script(circuits: &[(&str, &str, &str)]) -> String {
    let list: Vec<String> = circuits
        .iter()
        .map(|(btn_type, id, name)| {
            format!(
                r#"{{"strBtnType":"{}","strId":"{}","strCircuit":"{}"}}"#,
                btn_type, id, name
            )
        })
        .collect();
    format!(
        r#"window.onload = init({{"arrayCircuitNameList":[{}]}});"#,
        list.join(",")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_flow_page_builder() {
        let html = PowerFlowPageBuilder::new("2.5", "3.8")
            .add_source(1, "太陽光", "2500")
            .build();

        assert!(html.contains(r#"<div id="g_capacity">2.5</div>"#));
        assert!(html.contains(r#"<div id="u_capacity">3.8</div>"#));
        assert!(html.contains(r#"<div id="g_d_1_title"><span>太陽光</span></div>"#));
    }

    #[test]
    fn test_device_list_page_builder() {
        let html = DeviceListPageBuilder::with_devices(&[("エアコン", "350"), ("冷蔵庫", "80")])
            .build();

        assert!(html.contains(r#"<div id="stage_1"><div class="c_device"><span>エアコン</span>"#));
        assert!(html.contains(r#"<div id="stage_2"><div class="c_device"><span>冷蔵庫</span>"#));
    }

    #[test]
    fn test_circuit_script() {
        let script = create_circuit_script(&[("1", "30", "EV")]);
        assert_eq!(
            script,
            r#"window.onload = init({"arrayCircuitNameList":[{"strBtnType":"1","strId":"30","strCircuit":"EV"}]});"#
        );
    }
}
