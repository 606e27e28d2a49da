// Demo that looks for a custom box, picks it up and brings it back to the start pose.
// It runs against the simulated robot: the box sits somewhere around the robot, out of
// the initial camera view. Press Ctrl-C to quit once the task is done.
//
// Run with RUST_LOG=info to follow the sequence.

use pickup_lib::objects::{CustomObjectType, ObjectDefinition};
use pickup_lib::pose::{Angle, Pose};
use pickup_lib::sim::{SimConfig, SimulatedRobot};
use pickup_lib::{stop_channel, PickupController, TaskStatus};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let robot = SimulatedRobot::new(SimConfig::default())?
        .with_object(CustomObjectType::CustomType00, Pose::new(-180.0, 260.0, Angle::ZERO));

    let definition = ObjectDefinition::default_box();
    println!("Looking for a {:?} box with markers:", definition.object_type);
    for marker in definition.markers.as_array() {
        println!(" - {:?}", marker);
    }

    let controller = PickupController::new(robot, definition);

    let (stop_handle, stop_signal) = stop_channel();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Cannot listen for Ctrl-C: {e}");
        }
        stop_handle.stop();
    });

    println!("Press CTRL-C to quit");

    match controller.run(stop_signal).await? {
        TaskStatus::Completed { attempts } => {
            println!("Object picked up in {} attempt(s) and brought home", attempts)
        }
        TaskStatus::RetryBudgetExhausted { attempts } => {
            println!("Object still on the floor after {} attempt(s)", attempts)
        }
        TaskStatus::NotFound => println!("Cannot locate custom box"),
        TaskStatus::DefinitionRejected => println!("Object definition failed!"),
        TaskStatus::Interrupted => println!("Interrupted"),
    }

    for object in controller.robot().objects().await {
        println!(
            "Object {} at {} ({})",
            object.object_id,
            object.pose,
            if object.carried { "on the lift" } else { "on the floor" }
        );
    }

    Ok(())
}
