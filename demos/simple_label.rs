//! 簡單包裹號生成示例

use gls::{check_digit, DepotNumber, ParcelNumber, ParcelNumberGenerator, ServiceType};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== 簡單包裹號生成示例 ===\n");

    // 服務類型清單
    println!("服務類型:");
    for service in ServiceType::ALL {
        println!("  - {} ({}) → {}", service.key(), service.label(), service.code());
    }

    // 固定流水碼：站點 12 + 歐洲商務包裹
    let depot = DepotNumber::parse("12")?;
    let golden = ParcelNumber::assemble(&depot, ServiceType::EuroBusinessParcel, "3456789")?;
    println!(
        "\n固定流水碼: {}（檢查碼 {}）",
        golden,
        check_digit("12103456789")?
    );

    // 隨機流水碼
    let mut generator = ParcelNumberGenerator::with_thread_rng();
    for _ in 0..3 {
        let number = generator.generate_from_keys("12", "guaranteed_24")?;
        println!("隨機包裹號: {} (流水碼 {})", number, number.serial());
    }

    Ok(())
}
