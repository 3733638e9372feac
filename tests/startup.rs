use json_codec_options::tunables::{self, Tunables};

// The snapshot installs once per process, so the whole scenario lives in a
// single test; this binary must not gain other tests that touch the global.
#[test]
fn snapshot_installs_once_from_environment() {
    std::env::remove_var(tunables::ENV_ENCODE_BUFFER_SIZE);
    std::env::remove_var(tunables::ENV_MAX_ENCODE_STACK_SIZE);
    std::env::remove_var(tunables::ENV_MAX_DECODE_STACK_SIZE);
    std::env::set_var(tunables::ENV_MAX_DECODE_JSON_DEPTH, "100");

    let installed = tunables::init().expect("valid environment");
    assert_eq!(installed.max_decode_json_depth, 100);
    assert_eq!(installed.encode_buffer_size, tunables::DEFAULT_ENCODE_BUFFER_SIZE);
    assert_eq!(installed.max_encode_stack_size, tunables::DEFAULT_MAX_ENCODE_STACK_SIZE);
    assert_eq!(installed.max_decode_stack_size, tunables::DEFAULT_MAX_DECODE_STACK_SIZE);

    // Accessors read the same snapshot.
    assert_eq!(tunables::max_decode_json_depth(), 100);
    assert_eq!(tunables::current(), installed);

    // A changed environment after install is ignored: the transition from
    // default to overridden happens at most once per process.
    std::env::set_var(tunables::ENV_MAX_DECODE_JSON_DEPTH, "200");
    let again = tunables::init().expect("returns the installed snapshot");
    assert_eq!(again.max_decode_json_depth, 100);
    assert_eq!(*again, Tunables {
        max_decode_json_depth: 100,
        ..Tunables::default()
    });

    std::env::remove_var(tunables::ENV_MAX_DECODE_JSON_DEPTH);
}
