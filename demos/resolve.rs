use devprofile::resolve_profile;

fn main() {
    env_logger::init();
    let device_id = std::env::args().nth(1).unwrap_or_else(|| String::from("dream"));
    let profile = resolve_profile(&device_id);
    println!("Device: {}", profile.model);
    println!("\tNames: {:?}", profile.names);
    for name in profile.interfaces() {
        println!("\tInterface: {}", name);
    }
}
