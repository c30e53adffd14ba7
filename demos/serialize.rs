// This example shows how to use the serde feature to serialize the profile table to JSON.
fn main() {
    for profile in devprofile::profiles() {
        match serde_json::to_string_pretty(profile) {
            Ok(json) => {
                println!("{}", json);
            }
            Err(e) => {
                println!("{}", e);
            }
        }
    }
}
