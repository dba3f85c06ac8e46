const UNITS: [&str; 7] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

pub fn human_readable(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;
    while (size * 10.0).round() / 10.0 >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        return format!("{} {}", bytes, UNITS[0]);
    }
    format!("{:.1} {}", size, UNITS[unit])
}
