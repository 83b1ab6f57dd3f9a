use wql::{create_query, prelude::*};

#[derive(Default, Record)]
#[record(name = "Win32_NetworkAdapter", rename_all = "PascalCase")]
pub struct Adapter {
    pub device_id: String,
    pub mac_address: Option<String>,
    #[record(rename = "NetEnabled")]
    pub enabled: bool,
}

#[derive(Default, Record)]
#[record(rename_all = "camelCase")]
pub struct Camel {
    pub process_id: u32,
}

fn main() {
    assert_eq!(
        create_query::<Vec<Adapter>>(""),
        "SELECT DeviceId, MacAddress, NetEnabled FROM Win32_NetworkAdapter "
    );
    assert_eq!(create_query::<Vec<Camel>>(""), "SELECT processId FROM Camel ");
}
