// ABOUTME: Built-in tools registered on the checkup agent.
// ABOUTME: Greetings, system info, calculator, and echo.

mod calculate;
mod echo;
mod greet;
mod hello_world;
mod system_info;

pub use calculate::CalculateTool;
pub use echo::EchoMessageTool;
pub use greet::GreetTool;
pub use hello_world::HelloWorldTool;
pub use system_info::{SystemInfo, SystemInfoTool};
