use crate::constants::*;
use ambient_core::{ControlState, SynthesisEngine};
use anyhow::anyhow;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// The two-oscillator FM graph:
/// modulator -> mod gain -> carrier.frequency,
/// carrier -> [dry, reverb -> wet] -> mix -> master -> analyser -> destination.
pub struct FmGraph {
    ctx: web::AudioContext,
    carrier: web::OscillatorNode,
    modulator: web::OscillatorNode,
    mod_gain: web::GainNode,
    master_gain: web::GainNode,
    analyser: web::AnalyserNode,
    started: bool,
}

fn create_gain(ctx: &web::AudioContext, value: f32, label: &str) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(ctx).map_err(|e| anyhow!("{} GainNode error: {:?}", label, e))?;
    g.gain().set_value(value);
    Ok(g)
}

fn create_sine(
    ctx: &web::AudioContext,
    frequency_hz: f32,
    label: &str,
) -> anyhow::Result<web::OscillatorNode> {
    let osc = web::OscillatorNode::new(ctx)
        .map_err(|e| anyhow!("{} OscillatorNode error: {:?}", label, e))?;
    osc.set_type(web::OscillatorType::Sine);
    osc.frequency().set_value(frequency_hz);
    Ok(osc)
}

// Long, dark stereo impulse response: xorshift noise under an exponential decay
fn create_reverb(ctx: &web::AudioContext) -> anyhow::Result<web::ConvolverNode> {
    let reverb =
        web::ConvolverNode::new(ctx).map_err(|e| anyhow!("ConvolverNode error: {:?}", e))?;
    reverb.set_normalize(true);
    let sr = ctx.sample_rate();
    let len = (sr * REVERB_TAIL_SEC) as u32;
    let ir = ctx
        .create_buffer(2, len, sr)
        .map_err(|e| anyhow!("impulse buffer error: {:?}", e))?;
    let mut seeds: [u32; 2] = [0x1234ABCD, 0x7890FEDC];
    let dt = 1.0_f32 / sr;
    for (ch, seed) in seeds.iter_mut().enumerate() {
        let mut buf: Vec<f32> = Vec::with_capacity(len as usize);
        for i in 0..len {
            let mut x = *seed;
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            *seed = x;
            let n = (x as f32 / u32::MAX as f32) * 2.0 - 1.0;
            let t = i as f32 * dt;
            let dark = (1.0 - t / REVERB_TAIL_SEC).max(0.0);
            buf.push(n * (-t / REVERB_DECAY_SEC).exp() * (0.6 + 0.4 * dark));
        }
        ir.copy_to_channel(&mut buf, ch as i32)
            .map_err(|e| anyhow!("impulse copy error: {:?}", e))?;
    }
    reverb.set_buffer(Some(&ir));
    Ok(reverb)
}

fn connect(from: &web::AudioNode, to: &web::AudioNode) -> anyhow::Result<()> {
    from.connect_with_audio_node(to)
        .map(|_| ())
        .map_err(|e| anyhow!("connect error: {:?}", e))
}

/// Await a resume/suspend promise off the event handler and log rejections.
fn settle(label: &'static str, promise: Result<js_sys::Promise, JsValue>) {
    match promise {
        Ok(p) => spawn_local(async move {
            if let Err(e) = JsFuture::from(p).await {
                log::warn!("[audio] {} rejected: {:?}", label, e);
            }
        }),
        Err(e) => log::warn!("[audio] {} failed: {:?}", label, e),
    }
}

impl FmGraph {
    /// Wire the graph with `initial` parameters. Oscillators stay stopped
    /// until [`FmGraph::start`].
    pub fn build(ctx: &web::AudioContext, initial: &ControlState) -> anyhow::Result<Self> {
        let carrier = create_sine(ctx, initial.current_frequency as f32, "carrier")?;
        let modulator = create_sine(ctx, MODULATOR_HZ, "modulator")?;
        let mod_gain = create_gain(ctx, initial.current_mod_depth as f32, "mod depth")?;
        let master_gain = create_gain(ctx, initial.base_gain as f32, "master")?;
        let dry = create_gain(ctx, REVERB_DRY, "dry")?;
        let wet = create_gain(ctx, REVERB_WET, "wet")?;
        let mix = create_gain(ctx, 1.0, "mix")?;
        let reverb = create_reverb(ctx)?;
        let analyser =
            web::AnalyserNode::new(ctx).map_err(|e| anyhow!("AnalyserNode error: {:?}", e))?;
        analyser.set_fft_size(ANALYSER_FFT_SIZE);

        connect(&modulator, &mod_gain)?;
        mod_gain
            .connect_with_audio_param(&carrier.frequency())
            .map_err(|e| anyhow!("FM connect error: {:?}", e))?;

        connect(&carrier, &dry)?;
        connect(&carrier, &reverb)?;
        connect(&reverb, &wet)?;
        connect(&dry, &mix)?;
        connect(&wet, &mix)?;
        connect(&mix, &master_gain)?;
        connect(&master_gain, &analyser)?;
        connect(&analyser, &ctx.destination())?;

        log::info!(
            "[audio] graph ready sr={} fft={} modulator={}Hz",
            ctx.sample_rate(),
            ANALYSER_FFT_SIZE,
            MODULATOR_HZ
        );
        Ok(Self {
            ctx: ctx.clone(),
            carrier,
            modulator,
            mod_gain,
            master_gain,
            analyser,
            started: false,
        })
    }

    /// Start both oscillators. Returns false if they were already running.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        for (label, osc) in [("carrier", &self.carrier), ("modulator", &self.modulator)] {
            if let Err(e) = osc.start() {
                log::error!("[audio] {} start error: {:?}", label, e);
            }
        }
        true
    }

    pub fn resume(&self) {
        settle("resume", self.ctx.resume());
        log::info!("[audio] context state {:?}", self.ctx.state());
    }

    pub fn suspend(&self) {
        settle("suspend", self.ctx.suspend());
    }

    /// Copy the analyser's current time-domain bytes into `buf`.
    pub fn read_live(&self, buf: &mut [u8]) {
        self.analyser.get_byte_time_domain_data(buf);
    }

    fn ramp(&self, param: web::AudioParam, value: f64, time_constant_sec: f64) {
        _ = param.set_target_at_time(value as f32, self.ctx.current_time(), time_constant_sec);
    }
}

impl SynthesisEngine for FmGraph {
    fn set_carrier_frequency(&mut self, hz: f64, time_constant_sec: f64) {
        self.ramp(self.carrier.frequency(), hz, time_constant_sec);
    }

    fn set_modulation_depth(&mut self, depth: f64, time_constant_sec: f64) {
        self.ramp(self.mod_gain.gain(), depth, time_constant_sec);
    }

    fn set_master_gain(&mut self, gain: f64, time_constant_sec: f64) {
        self.ramp(self.master_gain.gain(), gain, time_constant_sec);
    }
}
