use vorth_core::errors::*;
use vorth_core::State;

/// Load the built-in vocabulary into the machine.
pub fn stdlib(state: &mut State) -> Result<()> {
    state.add_native_word("BYE", |state| {
        state.halt();
        Ok(())
    });

    state.add_native_word("?", |state| state.print_stack());

    state.add_native_word("WORDS", |state| state.print_vocabulary());

    state.add_native_word("??", |state| {
        state.print_stack()?;
        state.print_vocabulary()?;
        state.halt();
        Ok(())
    });

    state.add_native_word("EXECUTE", |state| {
        let object = state.pop()?;
        object.invoke(state)
    });

    Ok(())
}
