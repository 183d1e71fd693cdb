use std::io;

use vizij_transform_recorder::{
    ClipWriter, JsonClipWriter, RecorderConfig, RecordingSession, TransformSnapshot,
};

fn main() -> anyhow::Result<()> {
    let cfg = RecorderConfig::default()
        .with_interval(0.25)
        .with_clip_name("orbit");
    let mut session = RecordingSession::new(cfg)?;

    // Simulated host loop: a node orbiting the origin while yawing past the seam.
    let dt = 1.0 / 60.0;
    let mut node = TransformSnapshot::default();
    for frame in 0..120 {
        let t = frame as f32 * dt;
        node.position = [t.cos() * 2.0, 0.0, t.sin() * 2.0];
        node.rotation_degrees = [0.0, (t * 180.0) % 360.0, 0.0];
        session.tick_source(dt, &node);
    }

    println!(
        "captured {} keyframes ({}s)",
        session.sample_count(),
        session.duration()
    );

    let clip = session.finish();
    let mut writer = JsonClipWriter::new(io::stdout().lock());
    writer.write_clip(&clip)?;
    Ok(())
}
